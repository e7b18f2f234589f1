//! HTTP handlers for the glossary API

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{QueryRequest, QueryResponse, ResolvedQuery};
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Resolve a (possibly compound) glossary query.
///
/// Returns one result per sub-query, in fragment order. "No answer" is
/// a normal response (`source = "None"`); only collaborator failures
/// become HTTP errors.
pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "query must not be empty".to_string(),
        ));
    }

    let resolved = state.engine.resolve_all(&request.query).await?;

    let results = resolved
        .into_iter()
        .map(|(subquery, result)| ResolvedQuery { subquery, result })
        .collect();

    Ok(Json(QueryResponse { results }))
}
