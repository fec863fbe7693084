//! Read-only handlers over the seeded reference datasets. Everything here
//! is a thin list endpoint; the datasets are written only by the bootstrap.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::model::{ChartOfAccount, LoanReleaseEntryParam, SignatureParam, WeeklySavingTier};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    fn from_items(items: Vec<T>) -> Json<Self> {
        let total = items.len();
        Json(Self { items, total })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(err: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{:#}", err),
        }),
    )
}

#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    pub code: Option<String>,
}

pub async fn list_chart_of_accounts<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<AccountQuery>,
) -> Result<Json<ListResponse<ChartOfAccount>>, (StatusCode, Json<ErrorResponse>)> {
    let accounts = store
        .list_accounts(query.code.as_deref())
        .await
        .map_err(internal_error)?;
    Ok(ListResponse::from_items(accounts))
}

pub async fn list_weekly_savings<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ListResponse<WeeklySavingTier>>, (StatusCode, Json<ErrorResponse>)> {
    let tiers = store.list_tiers().await.map_err(internal_error)?;
    Ok(ListResponse::from_items(tiers))
}

pub async fn list_signature_params<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ListResponse<SignatureParam>>, (StatusCode, Json<ErrorResponse>)> {
    let params = store.list_signature_params().await.map_err(internal_error)?;
    Ok(ListResponse::from_items(params))
}

/// Entry params come back in their screen display order (`sort`).
pub async fn list_entry_params<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ListResponse<LoanReleaseEntryParam>>, (StatusCode, Json<ErrorResponse>)> {
    let params = store.list_entry_params().await.map_err(internal_error)?;
    Ok(ListResponse::from_items(params))
}
