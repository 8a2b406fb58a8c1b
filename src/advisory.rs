//! AQI health advisory classification.
//!
//! Maps an AQI value onto one of five severity tiers following the US EPA
//! breakpoints (50/100/150/200). The tier is the single source of truth for
//! everything derived from AQI severity: status label, display colors, and
//! tier-specific health guidance. Classification is a pure function; nothing
//! here touches configuration or I/O.

use serde::Serialize;

// ---

/// Severity tier for an AQI value.
///
/// Ordering follows severity, so tiers can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AqiLevel {
    // ---
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl AqiLevel {
    /// Select the tier by the first matching threshold in ascending order.
    pub fn from_aqi(aqi: u32) -> Self {
        // ---
        if aqi <= 50 {
            AqiLevel::Good
        } else if aqi <= 100 {
            AqiLevel::Moderate
        } else if aqi <= 150 {
            AqiLevel::UnhealthySensitive
        } else if aqi <= 200 {
            AqiLevel::Unhealthy
        } else {
            AqiLevel::VeryUnhealthy
        }
    }

    /// Human-readable status label.
    pub fn label(self) -> &'static str {
        // ---
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
        }
    }

    /// Primary display color token.
    pub fn color(self) -> &'static str {
        // ---
        match self {
            AqiLevel::Good => "#4CAF50",
            AqiLevel::Moderate => "#FFC107",
            AqiLevel::UnhealthySensitive => "#FF9800",
            AqiLevel::Unhealthy => "#F44336",
            AqiLevel::VeryUnhealthy => "#9C27B0",
        }
    }

    /// Two-stop gradient used for the headline card background.
    pub fn gradient(self) -> [&'static str; 2] {
        // ---
        match self {
            AqiLevel::Good => ["#4CAF50", "#66BB6A"],
            AqiLevel::Moderate => ["#FFC107", "#FFD54F"],
            AqiLevel::UnhealthySensitive => ["#FF9800", "#FFB74D"],
            AqiLevel::Unhealthy => ["#F44336", "#EF5350"],
            AqiLevel::VeryUnhealthy => ["#9C27B0", "#BA68C8"],
        }
    }

    pub fn medical_tips(self) -> &'static [&'static str] {
        // ---
        match self {
            AqiLevel::Good => &[
                "Air quality is satisfactory",
                "Ideal for outdoor activities",
                "No health precautions needed",
            ],
            AqiLevel::Moderate => &[
                "Sensitive individuals may experience minor irritation",
                "People with respiratory conditions should monitor symptoms",
                "Consider reducing prolonged outdoor exertion",
            ],
            AqiLevel::UnhealthySensitive => &[
                "People with heart/lung disease, elderly, and children should avoid prolonged outdoor exertion",
                "Everyone may experience mild symptoms",
                "Consider wearing N95 masks outdoors",
                "Keep rescue inhalers handy if you have asthma",
            ],
            AqiLevel::Unhealthy => &[
                "Everyone should avoid prolonged outdoor exertion",
                "People with heart/lung disease should avoid outdoor activities",
                "Wear N95 or P100 masks when going outside",
                "Seek medical attention if experiencing breathing difficulties",
            ],
            AqiLevel::VeryUnhealthy => &[
                "Health warning: everyone should avoid outdoor activities",
                "Stay indoors and keep activity levels low",
                "Wear high-quality masks (N95/P100) if you must go outside",
                "Seek immediate medical attention for any respiratory symptoms",
                "Consider relocating temporarily if possible",
            ],
        }
    }

    pub fn avoidance_tips(self) -> &'static [&'static str] {
        // ---
        match self {
            AqiLevel::Good => &[
                "Perfect time for jogging or cycling",
                "Open windows for fresh air",
                "Enjoy outdoor sports",
            ],
            AqiLevel::Moderate => &[
                "Limit intense outdoor activities during peak hours",
                "Keep windows closed during high traffic times",
                "Use air purifiers indoors if available",
            ],
            AqiLevel::UnhealthySensitive => &[
                "Avoid outdoor activities during peak pollution hours",
                "Keep windows and doors closed",
                "Use air purifiers with HEPA filters",
                "Avoid heavily trafficked areas",
            ],
            AqiLevel::Unhealthy => &[
                "Stay indoors as much as possible",
                "Seal gaps around doors and windows",
                "Use air purifiers on high settings",
                "Avoid driving with windows down",
                "Cancel outdoor events and activities",
            ],
            AqiLevel::VeryUnhealthy => &[
                "Do not go outside unless absolutely necessary",
                "Create a clean room with air purifiers",
                "Seal all windows and doors completely",
                "Avoid all physical activities",
                "Consider emergency evacuation if advised",
            ],
        }
    }
}

// ---

/// Static emergency-contact block attached to the two most severe tiers.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyInfo {
    // ---
    pub advice: &'static str,
    pub contacts: &'static [&'static str],
}

impl EmergencyInfo {
    fn standard() -> Self {
        // ---
        EmergencyInfo {
            advice: "If you experience difficulty breathing, chest pain, or severe coughing, \
                     seek immediate medical attention.",
            contacts: &["Emergency: 911", "Poison Control: 1-800-222-1222"],
        }
    }
}

/// Full advisory for one AQI value, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    // ---
    pub aqi: u32,
    pub level: AqiLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub gradient: [&'static str; 2],
    pub medical_tips: &'static [&'static str],
    pub avoidance_tips: &'static [&'static str],
    /// Present only when the AQI is above 150.
    pub emergency: Option<EmergencyInfo>,
}

/// Classify an AQI value into its advisory tier.
///
/// Pure and total: any `u32` maps to exactly one tier, and identical input
/// always yields an identical advisory.
pub fn classify(aqi: u32) -> Advisory {
    // ---
    let level = AqiLevel::from_aqi(aqi);

    Advisory {
        aqi,
        level,
        label: level.label(),
        color: level.color(),
        gradient: level.gradient(),
        medical_tips: level.medical_tips(),
        avoidance_tips: level.avoidance_tips(),
        emergency: (level >= AqiLevel::Unhealthy).then(EmergencyInfo::standard),
    }
}
