use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::GroupId;

pub type StudentId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Student {
    pub id: StudentId,
    pub group_id: GroupId,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(id: StudentId, group_id: GroupId, first_name: &str, last_name: &str) -> Self {
        Student {
            id,
            group_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
