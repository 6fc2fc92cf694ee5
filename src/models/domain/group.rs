use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

pub type GroupId = i64;

/// A class or cohort of students.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    pub fn new(id: GroupId, name: &str) -> Self {
        Group {
            id,
            name: name.to_string(),
        }
    }
}
