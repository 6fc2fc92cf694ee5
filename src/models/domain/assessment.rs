use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

pub type TestId = i64;

/// An assessment definition. Which groups attempted it is only known from
/// the result records.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Test {
    pub id: TestId,
    pub name: String,
}

impl Test {
    pub fn new(id: TestId, name: &str) -> Self {
        Test {
            id,
            name: name.to_string(),
        }
    }
}

