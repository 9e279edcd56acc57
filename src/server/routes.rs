//! HTTP route handlers for the vCon API.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::vcon::{PartyFilter, Vcon, search};

use super::state::AppState;

/// Create the API router with all routes.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/vcon", get(list_vcons))
        .route("/vcons/search", get(search_vcons))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "vcon-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Return every record in store order.
async fn list_vcons(State(state): State<Arc<AppState>>) -> Json<Vec<Vcon>> {
    let records = state.store.all().to_vec();
    tracing::debug!(count = records.len(), "Listing vCons");
    Json(records)
}

/// Return records with a party matching `name` or `tel`.
///
/// Missing or malformed parameters mean "no filter on that field"; the
/// response is always 200.
async fn search_vcons(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<Vec<Vcon>> {
    let filter = PartyFilter::from_query(query.as_deref());
    let results = search(state.store.as_ref(), &filter);
    tracing::debug!(
        name = ?filter.name,
        tel = ?filter.tel,
        count = results.len(),
        "Searched vCons"
    );
    Json(results)
}
