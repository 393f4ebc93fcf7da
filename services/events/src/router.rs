use axum::{Router, routing::get};
use tower::ServiceBuilder;

use events_core::health::healthz;
use events_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{city::find_all_cities, event::find_all_events, health::readyz};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Events
        .route("/events", get(find_all_events))
        // Cities
        .route("/cities", get(find_all_cities))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
