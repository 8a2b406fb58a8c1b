//! Data models for the air quality service.

use serde::{Deserialize, Serialize};

// ---

/// Placeholder weather values used when normalizing the air-pollution API
/// payload; the pollution endpoint does not carry weather data, so these
/// stay fixed until a weather API is wired in.
pub const PLACEHOLDER_TEMPERATURE_C: f32 = 20.0;
pub const PLACEHOLDER_HUMIDITY_PCT: f32 = 50.0;
pub const PLACEHOLDER_PRESSURE_HPA: f32 = 1013.0;

/// The upstream API reports AQI as a 1-5 category; multiply by this to land
/// in the familiar US 0-500 range.
pub const AQI_CATEGORY_SCALE: u32 = 50;

// ---

/// A single pollution reading for one location at one moment.
///
/// Pollutant concentrations are in µg/m³, rounded to whole numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutionReading {
    // ---
    pub aqi: u32,
    pub pm25: f32,
    pub pm10: f32,
    pub o3: f32,
    pub no2: f32,
    pub so2: f32,
    pub co: f32,
    /// Ambient temperature in °C.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Barometric pressure in hPa.
    pub pressure: f32,
}

/// One day in the 7-day history series. Only a subset of pollutants is
/// tracked historically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReading {
    // ---
    /// Short weekday label, e.g. "Mon".
    pub day: String,
    /// Full weekday name, e.g. "Monday".
    pub day_full: String,
    /// Formatted calendar date, e.g. "Aug 29".
    pub date: String,
    pub aqi: u32,
    pub pm25: f32,
    pub pm10: f32,
    pub o3: f32,
}

// ---

/// Raw air-pollution API response, shaped as
/// `{"list": [{"main": {"aqi": 1-5}, "components": {...}}]}`.
#[derive(Debug, Deserialize)]
pub struct RawAirPollution {
    // ---
    pub list: Vec<RawPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawPollutionEntry {
    // ---
    pub main: RawAqiCategory,
    #[serde(default)]
    pub components: RawComponents,
}

#[derive(Debug, Deserialize)]
pub struct RawAqiCategory {
    pub aqi: u32,
}

/// Pollutant concentrations from the API. Individual components may be
/// missing from the payload; absent fields default to zero.
#[derive(Debug, Default, Deserialize)]
pub struct RawComponents {
    // ---
    #[serde(default)]
    pub pm2_5: f32,
    #[serde(default)]
    pub pm10: f32,
    #[serde(default)]
    pub o3: f32,
    #[serde(default)]
    pub no2: f32,
    #[serde(default)]
    pub so2: f32,
    #[serde(default)]
    pub co: f32,
}

/// Normalization helpers
impl RawPollutionEntry {
    // ---
    pub fn to_reading(&self) -> PollutionReading {
        // ---
        PollutionReading {
            aqi: self.main.aqi * AQI_CATEGORY_SCALE,
            pm25: self.components.pm2_5.round(),
            pm10: self.components.pm10.round(),
            o3: self.components.o3.round(),
            no2: self.components.no2.round(),
            so2: self.components.so2.round(),
            co: self.components.co.round(),
            temperature: PLACEHOLDER_TEMPERATURE_C,
            humidity: PLACEHOLDER_HUMIDITY_PCT,
            pressure: PLACEHOLDER_PRESSURE_HPA,
        }
    }
}
