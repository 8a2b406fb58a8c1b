use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PollutionReading {
    aqi: u32,
    pm25: f32,
    pm10: f32,
    o3: f32,
    no2: f32,
    so2: f32,
    co: f32,
    temperature: f32,
    humidity: f32,
    pressure: f32,
}

#[derive(Debug, Deserialize)]
struct DailyReading {
    day: String,
    day_full: String,
    date: String,
    aqi: u32,
    pm25: f32,
    pm10: f32,
    o3: f32,
}

#[derive(Debug, Deserialize)]
struct Advisory {
    aqi: u32,
    level: String,
    label: String,
    color: String,
    gradient: Vec<String>,
    medical_tips: Vec<String>,
    avoidance_tips: Vec<String>,
    emergency: Option<EmergencyInfo>,
}

#[derive(Debug, Deserialize)]
struct EmergencyInfo {
    advice: String,
    contacts: Vec<String>,
}

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into())
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    // ---
    let url = format!("{}/health", base_url());
    let body: serde_json::Value = Client::new().get(&url).send().await?.json().await?;

    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn current_reading_fields_are_sane() -> Result<()> {
    // ---
    // Assumes the default synthetic setup (no OPENWEATHER_API_KEY).
    let url = format!(
        "{}/api/pollution/current?lat=40.7128&lon=-74.0060",
        base_url()
    );
    let r: PollutionReading = Client::new().get(&url).send().await?.json().await?;

    assert!((1..=200).contains(&r.aqi), "aqi out of range: {}", r.aqi);

    for (name, value) in [
        ("pm25", r.pm25),
        ("pm10", r.pm10),
        ("o3", r.o3),
        ("no2", r.no2),
        ("so2", r.so2),
        ("co", r.co),
        ("humidity", r.humidity),
        ("pressure", r.pressure),
    ] {
        assert!(value.is_finite(), "{} should be finite", name);
        assert!(value >= 0.0, "{} should be non-negative, got {}", name, value);
    }

    assert!(r.temperature.is_finite());
    Ok(())
}

#[tokio::test]
async fn current_reading_rejects_missing_coordinates() -> Result<()> {
    // ---
    let url = format!("{}/api/pollution/current", base_url());
    let status = Client::new().get(&url).send().await?.status();

    assert!(status.is_client_error(), "expected 4xx, got {}", status);
    Ok(())
}

#[tokio::test]
async fn weekly_series_returns_seven_labeled_days() -> Result<()> {
    // ---
    let url = format!("{}/api/pollution/weekly", base_url());
    let series: Vec<DailyReading> = Client::new().get(&url).send().await?.json().await?;

    assert_eq!(series.len(), 7, "Expected exactly 7 daily entries");

    let short_days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    for entry in &series {
        assert!(
            short_days.contains(&entry.day.as_str()),
            "Unexpected day label: {}",
            entry.day
        );
        assert!(
            entry.day_full.starts_with(&entry.day[..2]),
            "day_full '{}' should match day '{}'",
            entry.day_full,
            entry.day
        );
        assert!(!entry.date.is_empty());
        assert!((1..=150).contains(&entry.aqi));

        for value in [entry.pm25, entry.pm10, entry.o3] {
            assert!(value.is_finite() && value >= 0.0);
        }
    }

    // Consecutive entries must land on consecutive weekdays.
    for pair in series.windows(2) {
        let i = short_days.iter().position(|d| *d == pair[0].day).unwrap();
        let j = short_days.iter().position(|d| *d == pair[1].day).unwrap();
        assert_eq!((i + 1) % 7, j, "days not consecutive: {:?}", pair);
    }

    Ok(())
}

#[tokio::test]
async fn advisory_classification_boundaries() -> Result<()> {
    // ---
    let client = Client::new();

    let cases = [
        (0, "Good", "#4CAF50"),
        (50, "Good", "#4CAF50"),
        (51, "Moderate", "#FFC107"),
        (100, "Moderate", "#FFC107"),
        (101, "UnhealthySensitive", "#FF9800"),
        (150, "UnhealthySensitive", "#FF9800"),
        (151, "Unhealthy", "#F44336"),
        (200, "Unhealthy", "#F44336"),
        (201, "VeryUnhealthy", "#9C27B0"),
        (500, "VeryUnhealthy", "#9C27B0"),
    ];

    for (aqi, level, color) in cases {
        let url = format!("{}/api/advisory?aqi={}", base_url(), aqi);
        let advisory: Advisory = client.get(&url).send().await?.json().await?;

        assert_eq!(advisory.aqi, aqi);
        assert_eq!(advisory.level, level, "wrong level for aqi={}", aqi);
        assert_eq!(advisory.color, color, "wrong color for aqi={}", aqi);
        assert_eq!(advisory.gradient.len(), 2);
        assert_eq!(&advisory.gradient[0], &advisory.color);
        assert!(!advisory.label.is_empty());
        assert!((3..=5).contains(&advisory.medical_tips.len()));
        assert!((3..=5).contains(&advisory.avoidance_tips.len()));

        // Emergency block appears only above AQI 150.
        if aqi > 150 {
            let info = advisory
                .emergency
                .unwrap_or_else(|| panic!("missing emergency block at aqi={}", aqi));
            assert!(!info.advice.is_empty());
            assert_eq!(info.contacts.len(), 2);
        } else {
            assert!(
                advisory.emergency.is_none(),
                "unexpected emergency block at aqi={}",
                aqi
            );
        }
    }

    Ok(())
}

#[tokio::test]
async fn advisory_is_deterministic() -> Result<()> {
    // ---
    let client = Client::new();
    let url = format!("{}/api/advisory?aqi=123", base_url());

    let first: Advisory = client.get(&url).send().await?.json().await?;
    let second: Advisory = client.get(&url).send().await?.json().await?;

    assert_eq!(first.level, second.level);
    assert_eq!(first.color, second.color);
    assert_eq!(first.label, second.label);
    assert_eq!(first.medical_tips, second.medical_tips);
    assert_eq!(first.avoidance_tips, second.avoidance_tips);

    Ok(())
}
