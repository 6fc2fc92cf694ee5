use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::{GroupId, StudentId, TestId};

pub type SessionId = i64;

/// One completed session as recorded by the testing service.
///
/// `session_date` is `YYYY-MM-DD`; `start_time` and `end_time` are
/// `HH:MM` or `HH:MM:SS` on that date.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RawResultRecord {
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub test_id: TestId,
    pub group_id: GroupId,
    pub session_date: String,
    pub start_time: String,
    pub end_time: String,
    /// Points earned
    pub result: f64,
    /// Points possible
    pub answers: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A session record with the derived display name, duration and score.
/// Rebuilt on every search, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
pub struct EnrichedResult {
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub test_id: TestId,
    pub group_id: GroupId,
    pub session_date: String,
    pub start_time: String,
    pub end_time: String,
    pub result: f64,
    pub answers: f64,
    pub details: Option<String>,
    pub student: String,
    pub duration: String,
    pub duration_seconds: i64,
    pub score: u8,
}

impl EnrichedResult {
    pub fn from_record(
        record: RawResultRecord,
        student: String,
        duration: String,
        duration_seconds: i64,
        score: u8,
    ) -> Self {
        EnrichedResult {
            session_id: record.session_id,
            student_id: record.student_id,
            test_id: record.test_id,
            group_id: record.group_id,
            session_date: record.session_date,
            start_time: record.start_time,
            end_time: record.end_time,
            result: record.result,
            answers: record.answers,
            details: record.details,
            student,
            duration,
            duration_seconds,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_accepts_integer_points_and_missing_details() {
        let json = r#"{
            "session_id": 11, "student_id": 1, "test_id": 3, "group_id": 5,
            "session_date": "2024-01-01", "start_time": "09:00", "end_time": "09:20",
            "result": 8, "answers": 10
        }"#;
        let record: RawResultRecord =
            serde_json::from_str(json).expect("record should deserialize");

        assert_eq!(record.result, 8.0);
        assert_eq!(record.answers, 10.0);
        assert!(record.details.is_none());
    }

    #[test]
    fn enriched_result_keeps_record_fields() {
        let record = RawResultRecord {
            session_id: 11,
            student_id: 1,
            test_id: 3,
            group_id: 5,
            session_date: "2024-01-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:20".to_string(),
            result: 8.0,
            answers: 10.0,
            details: Some("q1:1;q2:0".to_string()),
        };

        let row = EnrichedResult::from_record(
            record,
            "Ann Lee".to_string(),
            "00:20:00".to_string(),
            1200,
            80,
        );

        assert_eq!(row.session_id, 11);
        assert_eq!(row.details.as_deref(), Some("q1:1;q2:0"));
        assert_eq!(row.student, "Ann Lee");
        assert_eq!(row.score, 80);
    }
}
