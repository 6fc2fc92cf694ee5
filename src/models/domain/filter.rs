use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::models::domain::{GroupId, TestId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Best,
    Worst,
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Best => write!(f, "best"),
            FilterMode::Worst => write!(f, "worst"),
        }
    }
}

/// Current search criteria and ranking mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, SimpleObject)]
pub struct FilterSelection {
    pub group_id: Option<GroupId>,
    pub test_id: Option<TestId>,
    pub filter_mode: FilterMode,
}
