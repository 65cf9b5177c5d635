//! Student model.
//!
//! A student is the unit being partitioned: an identifier, a gender,
//! an origin group (the class they came from), and one ordinal letter
//! grade per named grading criterion. Records are immutable once
//! built; placement stages clone them into rosters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// An ordinal letter grade, A (best) through D.
///
/// Carries an explicit ordinal table instead of deriving the value
/// from character codes, so scoring semantics do not depend on the
/// encoding of the input letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// All grades in order, best first.
    pub const ALL: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    /// Ordinal value used for weighted scoring: A=1, B=2, C=3, D=4.
    #[inline]
    pub fn ordinal(self) -> i64 {
        match self {
            Grade::A => 1,
            Grade::B => 2,
            Grade::C => 3,
            Grade::D => 4,
        }
    }

    /// Parses a letter into a grade.
    ///
    /// Returns `None` for anything outside {A, B, C, D}; callers treat
    /// such values as missing data, not as an error.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            _ => None,
        }
    }

    /// The letter form of this grade.
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
        }
    }
}

/// A student record.
///
/// Grades are keyed by criterion name (e.g. "academic",
/// "behavioral-support"); only criteria that also appear in the run's
/// [`WeightTable`](super::WeightTable) contribute to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier (name, or origin group + seat number).
    pub id: String,
    /// Human-readable name. May equal `id`.
    pub name: String,
    /// Gender.
    pub gender: Gender,
    /// Origin group: the class this student belonged to before the run.
    pub origin: String,
    /// Letter grade per named criterion.
    pub grades: HashMap<String, Grade>,
    /// Free-form remark carried through to the output unchanged.
    pub remark: String,
}

impl Student {
    /// Creates a new student.
    pub fn new(id: impl Into<String>, gender: Gender, origin: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            gender,
            origin: origin.into(),
            grades: HashMap::new(),
            remark: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a grade for a criterion.
    pub fn with_grade(mut self, criterion: impl Into<String>, grade: Grade) -> Self {
        self.grades.insert(criterion.into(), grade);
        self
    }

    /// Sets a grade from a raw letter.
    ///
    /// Letters outside {A, B, C, D} are silently skipped — the
    /// criterion is treated as missing for this student.
    pub fn with_grade_letter(mut self, criterion: impl Into<String>, letter: char) -> Self {
        if let Some(grade) = Grade::from_letter(letter) {
            self.grades.insert(criterion.into(), grade);
        }
        self
    }

    /// Sets the free-form remark.
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    /// Grade for a criterion, if recorded.
    pub fn grade(&self, criterion: &str) -> Option<Grade> {
        self.grades.get(criterion).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordinals() {
        assert_eq!(Grade::A.ordinal(), 1);
        assert_eq!(Grade::B.ordinal(), 2);
        assert_eq!(Grade::C.ordinal(), 3);
        assert_eq!(Grade::D.ordinal(), 4);
    }

    #[test]
    fn test_grade_from_letter() {
        assert_eq!(Grade::from_letter('A'), Some(Grade::A));
        assert_eq!(Grade::from_letter('D'), Some(Grade::D));
        assert_eq!(Grade::from_letter('E'), None);
        assert_eq!(Grade::from_letter('a'), None);
        assert_eq!(Grade::from_letter(' '), None);
    }

    #[test]
    fn test_grade_letter_round_trip() {
        for g in Grade::ALL {
            assert_eq!(Grade::from_letter(g.letter()), Some(g));
        }
    }

    #[test]
    fn test_student_builder() {
        let s = Student::new("1-07", Gender::Female, "1")
            .with_name("Kim")
            .with_grade("academic", Grade::B)
            .with_grade_letter("behavioral", 'C')
            .with_remark("transfer");

        assert_eq!(s.id, "1-07");
        assert_eq!(s.name, "Kim");
        assert_eq!(s.gender, Gender::Female);
        assert_eq!(s.origin, "1");
        assert_eq!(s.grade("academic"), Some(Grade::B));
        assert_eq!(s.grade("behavioral"), Some(Grade::C));
        assert_eq!(s.remark, "transfer");
    }

    #[test]
    fn test_invalid_grade_letter_skipped() {
        let s = Student::new("s1", Gender::Male, "1").with_grade_letter("academic", 'F');
        assert_eq!(s.grade("academic"), None);
    }

    #[test]
    fn test_name_defaults_to_id() {
        let s = Student::new("s1", Gender::Male, "2");
        assert_eq!(s.name, "s1");
    }
}
