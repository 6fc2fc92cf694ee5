use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::Test;

/// Outcome of a group selection as seen by the caller that made it.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct GroupSelection {
    /// False when a newer selection arrived before this one resolved
    pub applied: bool,
    pub tests: Vec<Test>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
