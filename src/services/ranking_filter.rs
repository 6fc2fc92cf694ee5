use std::collections::HashMap;

use crate::models::domain::{EnrichedResult, FilterMode, StudentId};

pub struct RankingFilter;

impl RankingFilter {
    /// Reduce `rows` according to `mode`.
    ///
    /// `Best` and `Worst` keep one row per student, in order of each
    /// student's first appearance. On equal scores the earlier row wins.
    pub fn apply(mode: FilterMode, rows: &[EnrichedResult]) -> Vec<EnrichedResult> {
        match mode {
            FilterMode::All => rows.to_vec(),
            FilterMode::Best => Self::pick_per_student(rows, |candidate, kept| candidate > kept),
            FilterMode::Worst => Self::pick_per_student(rows, |candidate, kept| candidate < kept),
        }
    }

    fn pick_per_student(
        rows: &[EnrichedResult],
        replaces: impl Fn(u8, u8) -> bool,
    ) -> Vec<EnrichedResult> {
        let mut slots: HashMap<StudentId, usize> = HashMap::new();
        let mut picked: Vec<&EnrichedResult> = Vec::new();

        for row in rows {
            match slots.get(&row.student_id) {
                Some(&slot) => {
                    if replaces(row.score, picked[slot].score) {
                        picked[slot] = row;
                    }
                }
                None => {
                    slots.insert(row.student_id, picked.len());
                    picked.push(row);
                }
            }
        }

        picked.into_iter().cloned().collect()
    }
}
