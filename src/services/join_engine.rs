use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{EnrichedResult, GroupId, RawResultRecord, Student, TestId},
    repositories::{Fetched, ResultRecordRepository, StudentRepository},
    services::metric_calculator::MetricCalculator,
};

/// Joins a group's roster with the recorded sessions of one test.
#[derive(Clone)]
pub struct JoinEngine {
    student_repository: Arc<dyn StudentRepository>,
    result_repository: Arc<dyn ResultRecordRepository>,
}

impl JoinEngine {
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        result_repository: Arc<dyn ResultRecordRepository>,
    ) -> Self {
        Self {
            student_repository,
            result_repository,
        }
    }

    /// Both fetches run concurrently and either failing fails the build.
    /// An empty roster or an empty session list yields `Fetched::Empty`.
    pub async fn build_results(
        &self,
        group_id: GroupId,
        test_id: TestId,
    ) -> AppResult<Fetched<Vec<EnrichedResult>>> {
        let (roster, records) = tokio::try_join!(
            self.student_repository.find_by_group(group_id),
            self.result_repository.find_by_test_and_group(test_id, group_id),
        )?;

        let (Fetched::Records(roster), Fetched::Records(records)) = (roster, records) else {
            log::info!(
                "No results to show for test {} in group {}",
                test_id,
                group_id
            );
            return Ok(Fetched::Empty);
        };

        let rows = records
            .into_iter()
            .map(|record| Self::enrich(record, &roster))
            .collect::<AppResult<Vec<_>>>()?;

        log::info!(
            "Built {} result rows for test {} in group {}",
            rows.len(),
            test_id,
            group_id
        );
        Ok(Fetched::Records(rows))
    }

    fn enrich(record: RawResultRecord, roster: &[Student]) -> AppResult<EnrichedResult> {
        let session_id = record.session_id;

        let elapsed = MetricCalculator::compute_duration(
            &record.session_date,
            &record.start_time,
            &record.end_time,
        )
        .map_err(|fault| fault.for_session(session_id))?;
        let score = MetricCalculator::compute_score(record.result, record.answers)
            .map_err(|fault| fault.for_session(session_id))?;

        let student = MetricCalculator::resolve_full_name(record.student_id, roster);
        if student.is_empty() {
            log::warn!(
                "Session {} belongs to student {} who is not on the roster of group {}",
                session_id,
                record.student_id,
                record.group_id
            );
        }

        Ok(EnrichedResult::from_record(
            record,
            student,
            MetricCalculator::format_duration(elapsed),
            elapsed.num_seconds(),
            score,
        ))
    }
}
