use std::{collections::HashSet, sync::Arc};

use crate::{
    errors::AppResult,
    models::domain::{GroupId, Test, TestId},
    repositories::{Fetched, ResultRecordRepository},
};

/// Narrows the test catalog to the tests a group has sessions for.
#[derive(Clone)]
pub struct CascadeResolver {
    repository: Arc<dyn ResultRecordRepository>,
}

impl CascadeResolver {
    pub fn new(repository: Arc<dyn ResultRecordRepository>) -> Self {
        Self { repository }
    }

    /// Catalog order is preserved. A group without associations yields no
    /// tests rather than the whole catalog.
    pub async fn resolve_tests_for_group(
        &self,
        group_id: GroupId,
        catalog: &[Test],
    ) -> AppResult<Vec<Test>> {
        let test_ids = match self.repository.find_test_ids_by_group(group_id).await? {
            Fetched::Empty => return Ok(Vec::new()),
            Fetched::Records(test_ids) => test_ids.into_iter().collect::<HashSet<TestId>>(),
        };

        Ok(catalog
            .iter()
            .filter(|test| test_ids.contains(&test.id))
            .cloned()
            .collect())
    }
}
