pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

/// Queries nested deeper than `graphql_max_depth` are rejected before they run.
pub fn create_schema(app_state: AppState) -> Schema {
    let max_depth = app_state.config.graphql_max_depth;
    log::debug!("Building results schema (max query depth {})", max_depth);

    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(max_depth)
        .data(app_state)
        .finish()
}
