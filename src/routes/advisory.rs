//! Health advisory endpoint.
//!
//! `GET /api/advisory?aqi=<n>` classifies an AQI value into its severity
//! tier and returns the tier's label, colors, and guidance lists. The
//! classification is pure, so this route needs no application state and the
//! subrouter stays generic over it.

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;

use crate::advisory::{classify, Advisory};

// ---

/// Query parameters for the advisory endpoint.
#[derive(Debug, Deserialize)]
struct AdvisoryQuery {
    aqi: u32,
}

async fn advisory(Query(params): Query<AdvisoryQuery>) -> Json<Advisory> {
    // ---
    Json(classify(params.aqi))
}

/// Create a subrouter containing the `/api/advisory` route.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/advisory", get(advisory))
}
