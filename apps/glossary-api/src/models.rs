//! Request and response models for the glossary API

use glossary_core::QueryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// One resolved sub-query, in fragment order
#[derive(Debug, Serialize)]
pub struct ResolvedQuery {
    pub subquery: String,
    pub result: QueryResult,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<ResolvedQuery>,
}
