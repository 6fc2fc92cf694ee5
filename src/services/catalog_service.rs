use std::sync::Arc;

use crate::{
    models::domain::{Group, Test},
    repositories::{GroupRepository, TestRepository},
    services::notifier::Notifier,
};

/// Groups and tests known to the service, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub groups: Vec<Group>,
    pub tests: Vec<Test>,
}

pub struct CatalogService {
    group_repository: Arc<dyn GroupRepository>,
    test_repository: Arc<dyn TestRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CatalogService {
    pub fn new(
        group_repository: Arc<dyn GroupRepository>,
        test_repository: Arc<dyn TestRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            group_repository,
            test_repository,
            notifier,
        }
    }

    /// A failed load is notified and leaves its list empty.
    pub async fn load_groups(&self) -> Vec<Group> {
        self.group_repository.find_all().await.unwrap_or_else(|err| {
            self.notifier.notify_error("Failed to load groups", &err);
            Vec::new()
        })
    }

    pub async fn load_tests(&self) -> Vec<Test> {
        self.test_repository.find_all().await.unwrap_or_else(|err| {
            self.notifier.notify_error("Failed to load tests", &err);
            Vec::new()
        })
    }

    pub async fn load(&self) -> Catalog {
        let (groups, tests) = tokio::join!(self.load_groups(), self.load_tests());
        log::info!(
            "Loaded catalog with {} groups and {} tests",
            groups.len(),
            tests.len()
        );
        Catalog { groups, tests }
    }
}
