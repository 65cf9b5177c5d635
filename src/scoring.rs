//! Weighted grade scoring.
//!
//! Converts a student's categorical grades into a single number:
//! the sum of `weight × ordinal(grade)` over the criteria named in the
//! run's weight table. Criteria the student lacks contribute zero —
//! missing or unparseable grades are treated as absent data, not as an
//! error.
//!
//! Two roster aggregations exist and are not interchangeable: the
//! **total** feeds reporting (class total score in the summary), while
//! the **mean** feeds balance comparisons in the swap optimizer, where
//! roster sizes may differ.

use crate::models::{ClassRoster, Student, WeightTable};

/// Weighted score of a single student.
///
/// Σ `weight × ordinal` over criteria present in both the weight table
/// and the student's grade map. A=1 through D=4, so a lower score means
/// stronger grades.
pub fn student_score(student: &Student, weights: &WeightTable) -> i64 {
    weights
        .iter()
        .filter_map(|(criterion, weight)| {
            student.grade(criterion).map(|g| weight * g.ordinal())
        })
        .sum()
}

/// Sum of student scores across a roster. Reporting aggregation.
pub fn roster_total_score(roster: &ClassRoster, weights: &WeightTable) -> i64 {
    roster
        .students
        .iter()
        .map(|s| student_score(s, weights))
        .sum()
}

/// Mean student score across a roster. Balance aggregation.
///
/// Returns 0.0 for an empty roster.
pub fn roster_mean_score(roster: &ClassRoster, weights: &WeightTable) -> f64 {
    if roster.is_empty() {
        return 0.0;
    }
    roster_total_score(roster, weights) as f64 / roster.len() as f64
}
