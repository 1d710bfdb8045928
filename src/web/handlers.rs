//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::query::{LocateParams, LocateQuery};
use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::net::SocketAddr;
use tracing::{debug, error, info};

/// Locate handler
///
/// Query parameters are read with first-occurrence semantics, so repeated
/// keys never cause a rejection.
pub async fn locate(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let remote = connect_info
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    info!("[{}] {}", remote, uri);

    match run_locate(&state, &remote, LocateParams::from_pairs(pairs)).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn run_locate(
    state: &AppState,
    remote: &str,
    params: LocateParams,
) -> Result<Response, ApiError> {
    let query = LocateQuery::from_params(&params).map_err(|e| {
        debug!("[{}] rejected query: {}", remote, e);
        ApiError::from(e)
    })?;

    info!(
        "[{}] mode={}, pattern={}, caseInsensitive={}",
        remote,
        query.pattern.mode(),
        query.pattern.as_str(),
        query.case_insensitive
    );

    let results = state.locator.locate(&query).await.map_err(|e| {
        error!("[{}] {}", remote, e);
        ApiError::from(e)
    })?;

    info!("[{}] {} results", remote, results.len());

    let body = serde_json::to_vec(&results).map_err(|e| {
        error!("[{}] failed to serialize results: {}", remote, e);
        ApiError::from(e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
