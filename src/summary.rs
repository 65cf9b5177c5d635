//! Per-class descriptive statistics.
//!
//! Computes one summary row per roster from a finished partition:
//! head counts by gender, the class's total weighted score, and a
//! per-criterion histogram of letter grades. Pure and read-only —
//! export collaborators consume the rows as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ClassId, Gender, Grade, Partition, WeightTable};
use crate::scoring::roster_total_score;

/// Letter-grade histogram for one criterion in one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl GradeCounts {
    fn record(&mut self, grade: Grade) {
        match grade {
            Grade::A => self.a += 1,
            Grade::B => self.b += 1,
            Grade::C => self.c += 1,
            Grade::D => self.d += 1,
        }
    }

    /// Count for one grade letter.
    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
        }
    }
}

/// One summary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Class identifier.
    pub class_id: ClassId,
    /// Total student count.
    pub total: usize,
    /// Male count.
    pub males: usize,
    /// Female count.
    pub females: usize,
    /// Total weighted score (sum, not mean).
    pub total_score: i64,
    /// Per-criterion grade histograms, for weighted criteria only.
    pub grade_counts: BTreeMap<String, GradeCounts>,
}

/// Summarizes a partition, one row per roster, overflow last.
pub fn summarize(partition: &Partition, weights: &WeightTable) -> Vec<ClassSummary> {
    partition
        .all_rosters()
        .map(|roster| {
            let mut grade_counts: BTreeMap<String, GradeCounts> = weights
                .iter()
                .map(|(criterion, _)| (criterion.to_string(), GradeCounts::default()))
                .collect();

            for student in &roster.students {
                for (criterion, counts) in grade_counts.iter_mut() {
                    if let Some(grade) = student.grade(criterion) {
                        counts.record(grade);
                    }
                }
            }

            ClassSummary {
                class_id: roster.id,
                total: roster.len(),
                males: roster.gender_count(Gender::Male),
                females: roster.gender_count(Gender::Female),
                total_score: roster_total_score(roster, weights),
                grade_counts,
            }
        })
        .collect()
}
