use std::cmp::Ordering;

use crate::models::{
    domain::EnrichedResult,
    dto::request::{RowSortInput, SortDirection, SortKey},
};

pub struct RowOrder;

impl RowOrder {
    /// Stable sort by one result column.
    pub fn sort(mut rows: Vec<EnrichedResult>, sort: RowSortInput) -> Vec<EnrichedResult> {
        rows.sort_by(|a, b| {
            let ordering = Self::compare(sort.key, a, b);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        rows
    }

    fn compare(key: SortKey, a: &EnrichedResult, b: &EnrichedResult) -> Ordering {
        match key {
            SortKey::Id => a.session_id.cmp(&b.session_id),
            SortKey::Student => a.student.cmp(&b.student),
            SortKey::Result => a.result.total_cmp(&b.result),
            SortKey::Score => a.score.cmp(&b.score),
            // ISO dates compare correctly as text
            SortKey::SessionDate => a.session_date.cmp(&b.session_date),
            SortKey::StartTime => {
                (&a.session_date, &a.start_time).cmp(&(&b.session_date, &b.start_time))
            }
            SortKey::Duration => a.duration_seconds.cmp(&b.duration_seconds),
        }
    }
}
