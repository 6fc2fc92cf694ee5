#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use assessment_results::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Group, GroupId, RawResultRecord, Student, Test, TestId},
    repositories::{
        Fetched, GroupRepository, ResultRecordRepository, StudentRepository, TestRepository,
    },
    services::notifier::Notifier,
};

/// Holds a repository call open until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

impl Gate {
    async fn pass(&self) {
        self.started.notify_one();
        self.release.notified().await;
    }
}

pub struct InMemoryGroupRepository {
    groups: Arc<RwLock<Vec<Group>>>,
}

impl InMemoryGroupRepository {
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            groups: Arc::new(RwLock::new(groups)),
        }
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_all(&self) -> AppResult<Vec<Group>> {
        Ok(self.groups.read().await.clone())
    }
}

pub struct InMemoryTestRepository {
    tests: Arc<RwLock<Vec<Test>>>,
}

impl InMemoryTestRepository {
    pub fn new(tests: Vec<Test>) -> Self {
        Self {
            tests: Arc::new(RwLock::new(tests)),
        }
    }
}

#[async_trait]
impl TestRepository for InMemoryTestRepository {
    async fn find_all(&self) -> AppResult<Vec<Test>> {
        Ok(self.tests.read().await.clone())
    }
}

pub struct InMemoryStudentRepository {
    students: Arc<RwLock<Vec<Student>>>,
    unavailable: bool,
}

impl InMemoryStudentRepository {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(RwLock::new(students)),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            students: Arc::new(RwLock::new(Vec::new())),
            unavailable: true,
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<Student>>> {
        if self.unavailable {
            return Err(AppError::FetchError("students service unavailable".into()));
        }
        let students = self.students.read().await;
        Ok(Fetched::from_records(
            students
                .iter()
                .filter(|s| s.group_id == group_id)
                .cloned()
                .collect(),
        ))
    }
}

pub struct InMemoryResultRecordRepository {
    records: Arc<RwLock<Vec<RawResultRecord>>>,
    group_gates: Mutex<HashMap<GroupId, Arc<Gate>>>,
    test_gates: Mutex<HashMap<TestId, Arc<Gate>>>,
}

impl InMemoryResultRecordRepository {
    pub fn new(records: Vec<RawResultRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            group_gates: Mutex::new(HashMap::new()),
            test_gates: Mutex::new(HashMap::new()),
        }
    }

    /// Hold test-id lookups for `group_id` until released
    pub fn gate_group(&self, group_id: GroupId) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.group_gates
            .lock()
            .unwrap()
            .insert(group_id, Arc::clone(&gate));
        gate
    }

    /// Hold session lookups for `test_id` until released
    pub fn gate_test(&self, test_id: TestId) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.test_gates
            .lock()
            .unwrap()
            .insert(test_id, Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl ResultRecordRepository for InMemoryResultRecordRepository {
    async fn find_test_ids_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<TestId>>> {
        let gate = self.group_gates.lock().unwrap().get(&group_id).cloned();
        if let Some(gate) = gate {
            gate.pass().await;
        }

        let records = self.records.read().await;
        let mut test_ids: Vec<TestId> = records
            .iter()
            .filter(|r| r.group_id == group_id)
            .map(|r| r.test_id)
            .collect();
        test_ids.sort_unstable();
        test_ids.dedup();
        Ok(Fetched::from_records(test_ids))
    }

    async fn find_by_test_and_group(
        &self,
        test_id: TestId,
        group_id: GroupId,
    ) -> AppResult<Fetched<Vec<RawResultRecord>>> {
        let gate = self.test_gates.lock().unwrap().get(&test_id).cloned();
        if let Some(gate) = gate {
            gate.pass().await;
        }

        let records = self.records.read().await;
        let mut sessions: Vec<RawResultRecord> = records
            .iter()
            .filter(|r| r.test_id == test_id && r.group_id == group_id)
            .cloned()
            .collect();
        // Same order as the Mongo repository: date, start, then session id
        sessions.sort_by(|a, b| {
            (&a.session_date, &a.start_time, a.session_id)
                .cmp(&(&b.session_date, &b.start_time, b.session_id))
        });
        Ok(Fetched::from_records(sessions))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<(String, AppError)>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<(String, AppError)> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, context: &str, error: &AppError) {
        self.errors
            .lock()
            .unwrap()
            .push((context.to_string(), error.clone()));
    }
}

pub fn record(
    session_id: i64,
    student_id: i64,
    test_id: TestId,
    group_id: GroupId,
    result: f64,
    answers: f64,
    start_time: &str,
    end_time: &str,
) -> RawResultRecord {
    RawResultRecord {
        session_id,
        student_id,
        test_id,
        group_id,
        session_date: "2024-01-01".to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        result,
        answers,
        details: None,
    }
}

pub fn catalog_groups() -> Vec<Group> {
    vec![
        Group::new(5, "CS-101"),
        Group::new(6, "CS-102"),
        Group::new(7, "CS-103"),
    ]
}

pub fn catalog_tests() -> Vec<Test> {
    vec![
        Test::new(1, "Algebra"),
        Test::new(2, "Geometry"),
        Test::new(3, "Statistics"),
        Test::new(4, "Calculus"),
    ]
}

pub fn roster() -> Vec<Student> {
    vec![
        Student::new(1, 5, "Ann", "Lee"),
        Student::new(2, 5, "Bo", "Chen"),
        Student::new(3, 6, "Cy", "Diaz"),
    ]
}

/// Group 5 sat tests 1 and 3, group 6 sat test 2, group 7 has no sessions.
pub fn sessions() -> Vec<RawResultRecord> {
    vec![
        record(101, 1, 3, 5, 8.0, 10.0, "09:00", "09:20"),
        record(102, 1, 3, 5, 7.0, 10.0, "10:00", "10:25"),
        record(103, 2, 3, 5, 5.0, 10.0, "10:30", "11:10"),
        record(104, 2, 3, 5, 9.0, 10.0, "11:00", "11:10:30"),
        record(105, 1, 1, 5, 3.0, 4.0, "12:00", "12:30"),
        record(106, 3, 2, 6, 6.0, 6.0, "08:00", "08:15"),
    ]
}

pub struct Harness {
    pub state: AppState,
    pub results: Arc<InMemoryResultRecordRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

pub async fn harness_with(
    students: InMemoryStudentRepository,
    records: Vec<RawResultRecord>,
) -> Harness {
    let results = Arc::new(InMemoryResultRecordRepository::new(records));
    let notifier = Arc::new(RecordingNotifier::default());
    let repositories = Repositories {
        groups: Arc::new(InMemoryGroupRepository::new(catalog_groups())),
        tests: Arc::new(InMemoryTestRepository::new(catalog_tests())),
        students: Arc::new(students),
        results: results.clone(),
    };

    let state =
        AppState::from_repositories(Config::from_env(), repositories, notifier.clone()).await;

    Harness {
        state,
        results,
        notifier,
    }
}

pub async fn harness() -> Harness {
    harness_with(InMemoryStudentRepository::new(roster()), sessions()).await
}
