use async_graphql::{Context, Object};

use crate::{
    graphql::helpers::{app_state, into_graphql},
    models::{
        domain::{EnrichedResult, FilterMode, GroupId},
        dto::{request::SearchInput, response::GroupSelection},
    },
    services::results_dispatcher::Resolution,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn select_group(
        &self,
        ctx: &Context<'_>,
        group_id: GroupId,
    ) -> async_graphql::Result<GroupSelection> {
        let state = app_state(ctx)?;
        let resolution = into_graphql(state.results.on_group_changed(group_id).await)?;

        Ok(match resolution {
            Resolution::Applied(tests) => GroupSelection {
                applied: true,
                tests,
            },
            Resolution::Superseded => GroupSelection {
                applied: false,
                tests: Vec::new(),
            },
        })
    }

    async fn submit_search(
        &self,
        ctx: &Context<'_>,
        input: SearchInput,
    ) -> async_graphql::Result<Vec<EnrichedResult>> {
        let state = app_state(ctx)?;
        into_graphql(state.results.on_submit(input).await)
    }

    async fn set_filter_mode(
        &self,
        ctx: &Context<'_>,
        mode: FilterMode,
    ) -> async_graphql::Result<Vec<EnrichedResult>> {
        let state = app_state(ctx)?;
        into_graphql(state.results.on_filter_mode_changed(mode).await)
    }
}
