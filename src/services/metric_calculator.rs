use chrono::{Duration, NaiveDate, NaiveTime};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::domain::{SessionId, Student, StudentId};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// A record whose metrics cannot be derived.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricFault {
    #[error("zero possible points")]
    DivisionFault,
    #[error("{0}")]
    InvalidRecord(String),
}

impl MetricFault {
    pub fn for_session(self, session_id: SessionId) -> AppError {
        match self {
            MetricFault::DivisionFault => AppError::DivisionFault { session_id },
            MetricFault::InvalidRecord(reason) => {
                AppError::InvalidRecord(format!("session {}: {}", session_id, reason))
            }
        }
    }
}

pub struct MetricCalculator;

impl MetricCalculator {
    /// Elapsed time between `start_time` and `end_time` on `session_date`.
    pub fn compute_duration(
        session_date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Duration, MetricFault> {
        let date = NaiveDate::parse_from_str(session_date, DATE_FORMAT).map_err(|_| {
            MetricFault::InvalidRecord(format!("session date '{}' is not YYYY-MM-DD", session_date))
        })?;
        let start = date.and_time(Self::parse_time(start_time)?);
        let end = date.and_time(Self::parse_time(end_time)?);

        let elapsed = end.signed_duration_since(start);
        if elapsed < Duration::zero() {
            return Err(MetricFault::InvalidRecord(format!(
                "end time {} is before start time {}",
                end_time, start_time
            )));
        }
        Ok(elapsed)
    }

    fn parse_time(value: &str) -> Result<NaiveTime, MetricFault> {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
            .ok_or_else(|| {
                MetricFault::InvalidRecord(format!("time '{}' is not HH:MM[:SS]", value))
            })
    }

    /// `HH:MM:SS`; hours keep counting past 24.
    pub fn format_duration(elapsed: Duration) -> String {
        let total = elapsed.num_seconds().max(0);
        format!(
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }

    /// Percentage of possible points earned, rounded half away from zero.
    pub fn compute_score(result: f64, answers: f64) -> Result<u8, MetricFault> {
        if answers == 0.0 {
            return Err(MetricFault::DivisionFault);
        }
        if !(answers > 0.0) {
            return Err(MetricFault::InvalidRecord(format!(
                "possible points must be positive, got {}",
                answers
            )));
        }
        if !(0.0..=answers).contains(&result) {
            return Err(MetricFault::InvalidRecord(format!(
                "earned points {} outside 0..={}",
                result, answers
            )));
        }

        Ok((result * 100.0 / answers).round() as u8)
    }

    /// Display name of the first roster entry with `student_id`, or an empty
    /// string when the roster has no such student.
    pub fn resolve_full_name(student_id: StudentId, roster: &[Student]) -> String {
        roster
            .iter()
            .find(|student| student.id == student_id)
            .map(Student::full_name)
            .unwrap_or_default()
    }
}
