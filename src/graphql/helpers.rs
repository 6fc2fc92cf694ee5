use async_graphql::{Context, ErrorExtensions};

use crate::{app_state::AppState, errors::AppResult};

/// Shared state registered on the schema
pub fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
}

/// Convert a service result, keeping the error code in the extensions
pub fn into_graphql<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|err| err.extend())
}
