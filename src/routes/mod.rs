use axum::Router;

use crate::PollutionProvider;

mod advisory;
mod health;
mod pollution;

// ---

pub fn router(provider: PollutionProvider) -> Router {
    // ---
    Router::new()
        .merge(pollution::router())
        .merge(advisory::router())
        .merge(health::router())
        .with_state(provider)
}
