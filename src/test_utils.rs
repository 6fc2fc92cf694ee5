#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        EnrichedResult, Group, RawResultRecord, SessionId, Student, StudentId, Test, TestId,
    };

    /// Raw session for group 5 on 2024-01-01, 09:00 to 09:20
    pub fn raw_record(
        session_id: SessionId,
        student_id: StudentId,
        test_id: TestId,
        result: f64,
        answers: f64,
    ) -> RawResultRecord {
        RawResultRecord {
            session_id,
            student_id,
            test_id,
            group_id: 5,
            session_date: "2024-01-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:20".to_string(),
            result,
            answers,
            details: None,
        }
    }

    /// Enriched row where only identity and score matter
    pub fn enriched_row(session_id: SessionId, student_id: StudentId, score: u8) -> EnrichedResult {
        EnrichedResult::from_record(
            raw_record(session_id, student_id, 3, score as f64, 100.0),
            format!("Student {}", student_id),
            "00:20:00".to_string(),
            1200,
            score,
        )
    }

    pub fn test_groups() -> Vec<Group> {
        vec![Group::new(5, "CS-101"), Group::new(6, "CS-102")]
    }

    pub fn test_catalog() -> Vec<Test> {
        vec![
            Test::new(1, "Algebra"),
            Test::new(2, "Geometry"),
            Test::new(3, "Statistics"),
            Test::new(4, "Calculus"),
        ]
    }

    pub fn test_roster() -> Vec<Student> {
        vec![
            Student::new(1, 5, "Ann", "Lee"),
            Student::new(2, 5, "Bo", "Chen"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_enriched_row() {
        let row = enriched_row(9, 2, 75);
        assert_eq!(row.session_id, 9);
        assert_eq!(row.student_id, 2);
        assert_eq!(row.score, 75);
    }

    #[test]
    fn test_fixtures_catalog() {
        let tests = test_catalog();
        assert_eq!(tests.len(), 4);
        assert_eq!(tests[0].name, "Algebra");
        assert_eq!(test_roster()[0].full_name(), "Ann Lee");
    }
}
