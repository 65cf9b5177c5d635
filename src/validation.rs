//! Input validation for partition runs.
//!
//! Checks structural integrity of the request before any placement
//! begins. Detects:
//! - A requested class count of zero
//! - Non-positive weights
//! - Duplicate student ids
//!
//! An empty weight table is accepted: every score is zero and
//! placement balances on origin and gender alone.
//!
//! These are the only hard failures in the engine; everything else
//! (unresolved group members, infeasible placements, exhausted
//! optimization budgets) degrades into [`PlacementNote`]s on the
//! result.
//!
//! [`PlacementNote`]: crate::models::PlacementNote

use std::collections::HashSet;

use crate::models::{Student, WeightTable};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Requested class count is zero.
    InvalidClassCount,
    /// A criterion carries a weight ≤ 0.
    NonPositiveWeight,
    /// Two students share the same id.
    DuplicateStudentId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a partition run.
///
/// Checks:
/// 1. Class count is at least 1
/// 2. Every weight is positive
/// 3. No two students share an id
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    students: &[Student],
    weights: &WeightTable,
    num_classes: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    if num_classes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidClassCount,
            "Requested class count must be at least 1",
        ));
    }

    for (criterion, weight) in weights.iter() {
        if weight <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeight,
                format!("Criterion '{criterion}' has non-positive weight {weight}"),
            ));
        }
    }

    let mut ids = HashSet::new();
    for s in students {
        if !ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudentId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
