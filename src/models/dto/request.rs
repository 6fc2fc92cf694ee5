use async_graphql::{Enum, InputObject};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{GroupId, TestId};

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SearchInput {
    #[validate(range(min = 1, message = "A group must be selected"))]
    pub group_id: GroupId,

    #[validate(range(min = 1, message = "A test must be selected"))]
    pub test_id: TestId,
}

/// Result table columns that rows can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Student,
    Result,
    Score,
    SessionDate,
    StartTime,
    Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, InputObject)]
pub struct RowSortInput {
    pub key: SortKey,
    #[graphql(default)]
    #[serde(default)]
    pub direction: SortDirection,
}
