use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Reference datasets (read-only; written only by the bootstrap)
        .route(
            "/chart-of-accounts",
            get(handlers::list_chart_of_accounts::<S>),
        )
        .route("/weekly-savings", get(handlers::list_weekly_savings::<S>))
        .route(
            "/signature-params",
            get(handlers::list_signature_params::<S>),
        )
        .route(
            "/loan-release-entry-params",
            get(handlers::list_entry_params::<S>),
        )
}
