use async_graphql::{Context, Object};

use crate::{
    graphql::helpers::{app_state, into_graphql},
    models::{
        domain::{EnrichedResult, FilterSelection, Group, Test},
        dto::request::RowSortInput,
    },
    services::row_order::RowOrder,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn groups(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Group>> {
        let state = app_state(ctx)?;
        Ok(state.results.catalog().groups.clone())
    }

    /// Full test catalog
    async fn tests(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Test>> {
        let state = app_state(ctx)?;
        Ok(state.results.catalog().tests.clone())
    }

    /// Tests selectable under the currently selected group
    async fn tests_for_group(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Test>> {
        let state = app_state(ctx)?;
        let snapshot = into_graphql(state.results.snapshot().await)?;
        Ok(snapshot.offered_tests)
    }

    async fn selection(&self, ctx: &Context<'_>) -> async_graphql::Result<FilterSelection> {
        let state = app_state(ctx)?;
        let snapshot = into_graphql(state.results.snapshot().await)?;
        Ok(snapshot.selection)
    }

    /// Current rows under the selected filter mode, optionally ordered
    async fn results(
        &self,
        ctx: &Context<'_>,
        sort: Option<RowSortInput>,
    ) -> async_graphql::Result<Vec<EnrichedResult>> {
        let state = app_state(ctx)?;
        let rows = into_graphql(state.results.snapshot().await)?.rows;
        Ok(match sort {
            Some(sort) => RowOrder::sort(rows, sort),
            None => rows,
        })
    }
}
