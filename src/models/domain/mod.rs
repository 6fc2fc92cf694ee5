pub mod assessment;
pub mod filter;
pub mod group;
pub mod result_record;
pub mod student;
pub use assessment::{Test, TestId};
pub use filter::{FilterMode, FilterSelection};
pub use group::{Group, GroupId};
pub use result_record::{EnrichedResult, RawResultRecord, SessionId};
pub use student::{Student, StudentId};
