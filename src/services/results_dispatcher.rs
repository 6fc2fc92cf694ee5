use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{EnrichedResult, FilterMode, FilterSelection, GroupId, Test, TestId},
        dto::request::SearchInput,
    },
    repositories::Fetched,
    services::{
        cascade_resolver::CascadeResolver, catalog_service::Catalog, join_engine::JoinEngine,
        notifier::Notifier, ranking_filter::RankingFilter,
    },
};

/// What a group selection produced for the caller that made it.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Applied(Vec<Test>),
    /// A newer selection was made before this one resolved
    Superseded,
}

/// Point-in-time copy of the dispatcher state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsSnapshot {
    pub selection: FilterSelection,
    pub offered_tests: Vec<Test>,
    /// Working set under the current filter mode
    pub rows: Vec<EnrichedResult>,
}

enum Command {
    GroupChanged {
        group_id: GroupId,
        reply: oneshot::Sender<AppResult<Resolution>>,
    },
    Submit {
        group_id: GroupId,
        test_id: TestId,
        reply: oneshot::Sender<AppResult<Vec<EnrichedResult>>>,
    },
    FilterModeChanged {
        mode: FilterMode,
        reply: oneshot::Sender<Vec<EnrichedResult>>,
    },
    Snapshot {
        reply: oneshot::Sender<ResultsSnapshot>,
    },
}

enum Completion {
    TestsResolved {
        seq: u64,
        group_id: GroupId,
        outcome: AppResult<Vec<Test>>,
        reply: oneshot::Sender<AppResult<Resolution>>,
    },
    ResultsBuilt {
        seq: u64,
        outcome: AppResult<Fetched<Vec<EnrichedResult>>>,
        reply: oneshot::Sender<AppResult<Vec<EnrichedResult>>>,
    },
}

/// Cloneable entry point to a running dispatcher.
#[derive(Clone)]
pub struct ResultsHandle {
    commands: mpsc::Sender<Command>,
    catalog: Arc<Catalog>,
}

impl ResultsHandle {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn on_group_changed(&self, group_id: GroupId) -> AppResult<Resolution> {
        self.request(|reply| Command::GroupChanged { group_id, reply })
            .await?
    }

    pub async fn on_submit(&self, input: SearchInput) -> AppResult<Vec<EnrichedResult>> {
        input.validate()?;
        self.request(|reply| Command::Submit {
            group_id: input.group_id,
            test_id: input.test_id,
            reply,
        })
        .await?
    }

    pub async fn on_filter_mode_changed(&self, mode: FilterMode) -> AppResult<Vec<EnrichedResult>> {
        self.request(|reply| Command::FilterModeChanged { mode, reply })
            .await
    }

    pub async fn snapshot(&self) -> AppResult<ResultsSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> AppResult<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| AppError::DispatcherClosed)?;
        response.await.map_err(|_| AppError::DispatcherClosed)
    }
}

/// Sole owner of the selection, the offered tests and the working set.
///
/// Resolutions and searches run as spawned tasks and report back through a
/// completion channel. Each carries the sequence number it was started
/// with; only the newest of each kind is applied.
pub struct ResultsDispatcher {
    catalog: Arc<Catalog>,
    resolver: CascadeResolver,
    join_engine: JoinEngine,
    notifier: Arc<dyn Notifier>,
    completions: mpsc::UnboundedSender<Completion>,
    selection: FilterSelection,
    offered_tests: Vec<Test>,
    rows: Vec<EnrichedResult>,
    resolution_seq: u64,
    submit_seq: u64,
}

impl ResultsDispatcher {
    /// Start the dispatcher on the current tokio runtime. It stops once
    /// every handle has been dropped.
    pub fn spawn(
        catalog: Catalog,
        resolver: CascadeResolver,
        join_engine: JoinEngine,
        notifier: Arc<dyn Notifier>,
        queue_depth: usize,
    ) -> ResultsHandle {
        let (commands_tx, commands_rx) = mpsc::channel(queue_depth.max(1));
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let catalog = Arc::new(catalog);

        let dispatcher = Self {
            offered_tests: catalog.tests.clone(),
            catalog: Arc::clone(&catalog),
            resolver,
            join_engine,
            notifier,
            completions: completions_tx,
            selection: FilterSelection::default(),
            rows: Vec::new(),
            resolution_seq: 0,
            submit_seq: 0,
        };
        tokio::spawn(dispatcher.run(commands_rx, completions_rx));

        ResultsHandle {
            commands: commands_tx,
            catalog,
        }
    }

    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut completions: mpsc::UnboundedReceiver<Completion>,
    ) {
        log::info!("Results dispatcher started");
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(completion) = completions.recv() => self.handle_completion(completion),
            }
        }
        log::info!("Results dispatcher stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::GroupChanged { group_id, reply } => self.start_resolution(group_id, reply),
            Command::Submit {
                group_id,
                test_id,
                reply,
            } => self.start_search(group_id, test_id, reply),
            Command::FilterModeChanged { mode, reply } => {
                self.selection.filter_mode = mode;
                let _ = reply.send(self.filtered_rows());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(ResultsSnapshot {
                    selection: self.selection.clone(),
                    offered_tests: self.offered_tests.clone(),
                    rows: self.filtered_rows(),
                });
            }
        }
    }

    fn start_resolution(
        &mut self,
        group_id: GroupId,
        reply: oneshot::Sender<AppResult<Resolution>>,
    ) {
        self.selection.group_id = Some(group_id);
        self.resolution_seq += 1;
        let seq = self.resolution_seq;

        let resolver = self.resolver.clone();
        let catalog = Arc::clone(&self.catalog);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = resolver
                .resolve_tests_for_group(group_id, &catalog.tests)
                .await;
            let _ = completions.send(Completion::TestsResolved {
                seq,
                group_id,
                outcome,
                reply,
            });
        });
    }

    fn start_search(
        &mut self,
        group_id: GroupId,
        test_id: TestId,
        reply: oneshot::Sender<AppResult<Vec<EnrichedResult>>>,
    ) {
        self.selection.group_id = Some(group_id);
        self.selection.test_id = Some(test_id);
        self.rows.clear();
        self.submit_seq += 1;
        let seq = self.submit_seq;

        let join_engine = self.join_engine.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = join_engine.build_results(group_id, test_id).await;
            let _ = completions.send(Completion::ResultsBuilt {
                seq,
                outcome,
                reply,
            });
        });
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::TestsResolved {
                seq,
                group_id,
                outcome,
                reply,
            } => {
                if seq != self.resolution_seq {
                    log::warn!(
                        "Discarding stale test list for group {} (resolution {}, latest {})",
                        group_id,
                        seq,
                        self.resolution_seq
                    );
                    let _ = reply.send(Ok(Resolution::Superseded));
                    return;
                }
                match outcome {
                    Ok(tests) => {
                        self.offered_tests = tests.clone();
                        let _ = reply.send(Ok(Resolution::Applied(tests)));
                    }
                    Err(err) => {
                        self.offered_tests.clear();
                        self.notifier
                            .notify_error("Failed to load tests for group", &err);
                        let _ = reply.send(Err(err));
                    }
                }
            }
            Completion::ResultsBuilt {
                seq,
                outcome,
                reply,
            } => {
                if seq != self.submit_seq {
                    log::warn!(
                        "Discarding stale results (search {}, latest {})",
                        seq,
                        self.submit_seq
                    );
                    let _ = reply.send(Err(AppError::Superseded));
                    return;
                }
                match outcome {
                    Ok(Fetched::Records(rows)) => self.rows = rows,
                    Ok(Fetched::Empty) => self.rows.clear(),
                    Err(err) => {
                        self.rows.clear();
                        self.notifier.notify_error("Failed to load results", &err);
                        let _ = reply.send(Err(err));
                        return;
                    }
                }
                let _ = reply.send(Ok(self.filtered_rows()));
            }
        }
    }

    fn filtered_rows(&self) -> Vec<EnrichedResult> {
        RankingFilter::apply(self.selection.filter_mode, &self.rows)
    }
}
