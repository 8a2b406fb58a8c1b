//! Pollution data provider.
//!
//! Produces `PollutionReading` records and the 7-day history series. Two
//! paths exist:
//! - **synthetic**: pseudo-random readings whose pollutant fields scale
//!   loosely with the generated AQI; never fails
//! - **live**: GET against an OpenWeatherMap-style air-pollution API,
//!   normalized into the same record shape
//!
//! The live path is only taken when an API key is configured. On request or
//! parse failure the configured [`FallbackPolicy`] decides whether the error
//! propagates to the caller or synthetic data is substituted with a warning.
//!
//! The provider is an explicitly constructed value handed to the routes as
//! Axum state; there is no global instance.

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

use crate::{Config, DailyReading, FallbackPolicy, PollutionReading, RawAirPollution};

// ---

#[derive(Clone)]
pub struct PollutionProvider {
    // ---
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    fallback: FallbackPolicy,
}

impl PollutionProvider {
    /// Build a provider from the loaded configuration.
    ///
    /// The HTTP client is constructed here with the configured request
    /// timeout; cloning the provider shares the client's connection pool.
    pub fn new(cfg: &Config) -> Result<Self> {
        // ---
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.request_timeout_secs as u64))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(PollutionProvider {
            client,
            api_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
            fallback: cfg.fallback,
        })
    }

    /// Current pollution reading for a coordinate pair.
    ///
    /// Without an API key this is purely synthetic and the coordinates are
    /// accepted but unused. With a key, the live API is queried and the
    /// fallback policy governs failure handling.
    pub async fn current_reading(&self, lat: f64, lon: f64) -> Result<PollutionReading> {
        // ---
        let Some(key) = self.api_key.clone() else {
            return Ok(synthetic_reading(&mut rand::thread_rng()));
        };

        match self.live_reading(lat, lon, &key).await {
            Ok(reading) => Ok(reading),
            Err(e) => match self.fallback {
                FallbackPolicy::Synthetic => {
                    tracing::warn!(
                        "Live pollution fetch failed, substituting synthetic data: {:#}",
                        e
                    );
                    Ok(synthetic_reading(&mut rand::thread_rng()))
                }
                FallbackPolicy::Propagate => Err(e),
            },
        }
    }

    /// Fetch and normalize a reading from the live air-pollution API.
    async fn live_reading(&self, lat: f64, lon: f64, api_key: &str) -> Result<PollutionReading> {
        // ---
        tracing::debug!("Fetching live pollution data for lat={} lon={}", lat, lon);

        let response: RawAirPollution = self
            .client
            .get(&self.api_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", api_key.to_string()),
            ])
            .send()
            .await
            .context("Pollution API request failed")?
            .error_for_status()
            .context("Pollution API returned an error status")?
            .json()
            .await
            .context("Failed to parse pollution API response")?;

        let entry = response
            .list
            .first()
            .ok_or_else(|| anyhow!("Pollution API response contained an empty list"))?;

        Ok(entry.to_reading())
    }

    /// 7-day history series, oldest first, ending today.
    pub fn weekly_series(&self) -> Vec<DailyReading> {
        // ---
        weekly_series_from(Utc::now().date_naive(), &mut rand::thread_rng())
    }
}

// ---

/// Generate a synthetic reading with AQI drawn uniformly from [1, 200].
fn synthetic_reading<R: Rng>(rng: &mut R) -> PollutionReading {
    // ---
    let aqi = rng.gen_range(1u32..=200);
    reading_for_aqi(rng, aqi)
}

/// Pollutant fields are each drawn from their own base range, then scaled by
/// `aqi / 100` so they correlate loosely with the AQI. Weather fields are
/// independent of AQI.
fn reading_for_aqi<R: Rng>(rng: &mut R, aqi: u32) -> PollutionReading {
    // ---
    let factor = aqi as f32 / 100.0;

    PollutionReading {
        aqi,
        pm25: (rng.gen_range(10.0f32..60.0) * factor).round(),
        pm10: (rng.gen_range(20.0f32..100.0) * factor).round(),
        o3: (rng.gen_range(30.0f32..130.0) * factor).round(),
        no2: (rng.gen_range(15.0f32..75.0) * factor).round(),
        so2: (rng.gen_range(5.0f32..45.0) * factor).round(),
        co: (rng.gen_range(500.0f32..2500.0) * factor).round(),
        temperature: rng.gen_range(5.0f32..35.0).round(),
        humidity: rng.gen_range(30.0f32..90.0).round(),
        pressure: rng.gen_range(1000.0f32..1050.0).round(),
    }
}

/// Build the 7-entry series ending at `today`.
///
/// Weekday labels are derived from each computed date, so the series is
/// labeled correctly no matter which day it is requested on. The history
/// ceiling for AQI is 150, narrower than the single-reading range.
fn weekly_series_from<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<DailyReading> {
    // ---
    (0..7i64)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            let aqi = rng.gen_range(1u32..=150);
            let factor = aqi as f32 / 100.0;

            DailyReading {
                day: date.format("%a").to_string(),
                day_full: date.format("%A").to_string(),
                date: date.format("%b %-d").to_string(),
                aqi,
                pm25: (rng.gen_range(10.0f32..60.0) * factor).round(),
                pm10: (rng.gen_range(20.0f32..100.0) * factor).round(),
                o3: (rng.gen_range(30.0f32..130.0) * factor).round(),
            }
        })
        .collect()
}
