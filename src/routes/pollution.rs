//! Pollution reading endpoints.
//!
//! Sibling module in the `routes` directory following the Explicit Module
//! Boundary Pattern (EMBP):
//! - Internal to this file: endpoint handlers and query types
//! - Exports to the gateway (`mod.rs`): a subrouter with the pollution routes
//!
//! `GET /api/pollution/current` returns a reading for a coordinate pair;
//! `GET /api/pollution/weekly` returns the 7-day history series.

use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{DailyReading, PollutionProvider};

// ---

pub fn router() -> Router<PollutionProvider> {
    // ---
    Router::new()
        .route("/api/pollution/current", get(current))
        .route("/api/pollution/weekly", get(weekly))
}

/// Query parameters for the current-reading endpoint.
#[derive(Debug, Deserialize)]
struct CurrentQuery {
    lat: f64,
    lon: f64,
}

async fn current(
    Query(params): Query<CurrentQuery>,
    State(provider): State<PollutionProvider>,
) -> impl IntoResponse {
    // ---
    info!(
        "GET /api/pollution/current lat={} lon={}",
        params.lat, params.lon
    );

    match provider.current_reading(params.lat, params.lon).await {
        Ok(reading) => (StatusCode::OK, Json(reading)).into_response(),
        Err(e) => {
            error!("Failed to fetch pollution data: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json("Failed to fetch pollution data"),
            )
                .into_response()
        }
    }
}

async fn weekly(State(provider): State<PollutionProvider>) -> Json<Vec<DailyReading>> {
    // ---
    info!("GET /api/pollution/weekly");
    Json(provider.weekly_series())
}
