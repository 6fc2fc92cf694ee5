pub mod group_repository;
pub mod result_record_repository;
pub mod student_repository;
pub mod test_repository;

pub use group_repository::{GroupRepository, MongoGroupRepository};
pub use result_record_repository::{MongoResultRecordRepository, ResultRecordRepository};
pub use student_repository::{MongoStudentRepository, StudentRepository};
pub use test_repository::{MongoTestRepository, TestRepository};

/// Outcome of a lookup that can legitimately find nothing.
///
/// `Empty` is the data source saying "no records" for the query; it is a
/// valid state, not a failure. Failures travel as `Err` in `AppResult`.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched<T> {
    Records(T),
    Empty,
}

impl<T> Fetched<Vec<T>> {
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Records(records)
        }
    }
}

impl<T> Fetched<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Fetched::Empty)
    }

    pub fn into_records(self) -> Option<T> {
        match self {
            Fetched::Records(records) => Some(records),
            Fetched::Empty => None,
        }
    }
}
