use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    repositories::{
        GroupRepository, MongoGroupRepository, MongoResultRecordRepository,
        MongoStudentRepository, MongoTestRepository, ResultRecordRepository, StudentRepository,
        TestRepository,
    },
    services::{
        cascade_resolver::CascadeResolver,
        catalog_service::CatalogService,
        join_engine::JoinEngine,
        notifier::{LogNotifier, Notifier},
        results_dispatcher::{ResultsDispatcher, ResultsHandle},
    },
};

/// Data sources the results view reads from.
pub struct Repositories {
    pub groups: Arc<dyn GroupRepository>,
    pub tests: Arc<dyn TestRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub results: Arc<dyn ResultRecordRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub results: ResultsHandle,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, db: &Database) -> Self {
        let repositories = Repositories {
            groups: Arc::new(MongoGroupRepository::new(db, &config.groups_collection)),
            tests: Arc::new(MongoTestRepository::new(db, &config.tests_collection)),
            students: Arc::new(MongoStudentRepository::new(db, &config.students_collection)),
            results: Arc::new(MongoResultRecordRepository::new(db, &config.results_collection)),
        };
        Self::prepare_indexes(&repositories, config.ensure_indexes).await;

        Self::from_repositories(config, repositories, Arc::new(LogNotifier)).await
    }

    /// Opt-in. A failure is logged and startup carries on.
    pub async fn prepare_indexes(repositories: &Repositories, enabled: bool) {
        if !enabled {
            log::info!("Skipping index creation (ENSURE_INDEXES is off)");
            return;
        }

        let (students, results) = tokio::join!(
            repositories.students.ensure_indexes(),
            repositories.results.ensure_indexes(),
        );
        for (collection, outcome) in [("students", students), ("results", results)] {
            if let Err(err) = outcome {
                log::warn!("Could not create indexes for {} collection: {}", collection, err);
            }
        }
    }

    /// Load the catalog and start the dispatcher over the given sources.
    pub async fn from_repositories(
        config: Config,
        repositories: Repositories,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let catalog_service = CatalogService::new(
            repositories.groups,
            repositories.tests,
            Arc::clone(&notifier),
        );
        let catalog = catalog_service.load().await;

        let resolver = CascadeResolver::new(Arc::clone(&repositories.results));
        let join_engine = JoinEngine::new(repositories.students, repositories.results);
        let results = ResultsDispatcher::spawn(
            catalog,
            resolver,
            join_engine,
            notifier,
            config.dispatcher_queue_depth,
        );

        Self {
            results,
            config: Arc::new(config),
        }
    }
}
