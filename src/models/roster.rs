//! Roster and partition (solution) models.
//!
//! A partition is a complete assignment of students to destination
//! classes plus a reserved overflow class for students that could not
//! be legally placed. Degradations encountered while building it are
//! recorded as [`PlacementNote`]s instead of being raised.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Gender, Student};

/// Identifier of a destination class or the reserved overflow class.
///
/// Destination classes are numbered from 1. The overflow class renders
/// as `Class_X`, matching the printed-roster convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassId {
    /// A regular destination class, 1-based.
    Class(u32),
    /// Reserved bucket for students that no class could legally take.
    Overflow,
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassId::Class(n) => write!(f, "Class_{n}"),
            ClassId::Overflow => write!(f, "Class_X"),
        }
    }
}

/// Per-gender cap on students from one origin group in one class.
///
/// Caps keep destination classes from absorbing too many students of
/// the same gender from a single previous class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCaps {
    /// Max males from one origin group per destination class.
    pub male_per_origin: usize,
    /// Max females from one origin group per destination class.
    pub female_per_origin: usize,
}

impl GenderCaps {
    /// Creates caps from per-gender limits.
    pub fn new(male_per_origin: usize, female_per_origin: usize) -> Self {
        Self {
            male_per_origin,
            female_per_origin,
        }
    }

    /// Effectively unbounded caps, for unconstrained runs and tests.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// The cap that applies to the given gender.
    #[inline]
    pub fn for_gender(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male_per_origin,
            Gender::Female => self.female_per_origin,
        }
    }
}

/// A destination class and the students placed in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRoster {
    /// Class identifier.
    pub id: ClassId,
    /// Placed students, in placement order.
    pub students: Vec<Student>,
}

impl ClassRoster {
    /// Creates an empty roster.
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            students: Vec::new(),
        }
    }

    /// Number of placed students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Adds a student.
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Count of students of the given gender.
    pub fn gender_count(&self, gender: Gender) -> usize {
        self.students.iter().filter(|s| s.gender == gender).count()
    }

    /// Count of students of the given gender from the given origin group.
    pub fn origin_gender_count(&self, origin: &str, gender: Gender) -> usize {
        self.students
            .iter()
            .filter(|s| s.gender == gender && s.origin == origin)
            .count()
    }

    /// Whether the roster contains a student with the given id.
    pub fn contains(&self, student_id: &str) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }
}

/// Classification of soft degradations during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementNoteKind {
    /// A constraint-group member id matched no input student.
    UnresolvedGroupMember,
    /// No destination class could take a student under the caps.
    PlacementInfeasible,
    /// Local search stopped at the pass budget without converging.
    OptimizationBudgetExhausted,
}

/// A non-fatal diagnostic accumulated on the partition.
///
/// The engine never aborts a run for unsatisfiable constraints; it
/// records a note and degrades (skipping the member, routing the
/// student to overflow, or returning the best rosters found so far).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementNote {
    /// Note category.
    pub kind: PlacementNoteKind,
    /// Related student id, or empty for run-level notes.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

impl PlacementNote {
    /// Creates an unresolved-group-member note.
    pub fn unresolved_member(student_id: impl Into<String>) -> Self {
        let student_id = student_id.into();
        Self {
            message: format!("Group member '{student_id}' matches no input student"),
            kind: PlacementNoteKind::UnresolvedGroupMember,
            entity_id: student_id,
        }
    }

    /// Creates a placement-infeasible note.
    pub fn infeasible(student_id: impl Into<String>) -> Self {
        let student_id = student_id.into();
        Self {
            message: format!("No class can take '{student_id}' under the origin caps; routed to overflow"),
            kind: PlacementNoteKind::PlacementInfeasible,
            entity_id: student_id,
        }
    }

    /// Creates an optimization-budget-exhausted note.
    pub fn budget_exhausted(max_iterations: usize) -> Self {
        Self {
            kind: PlacementNoteKind::OptimizationBudgetExhausted,
            entity_id: String::new(),
            message: format!("Swap optimization stopped after {max_iterations} passes without converging"),
        }
    }
}

/// A finished partition: destination rosters, the overflow roster, and
/// any notes accumulated along the way.
///
/// Considered immutable once returned; callers summarize or export it
/// but do not edit it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// Destination class rosters, index order `Class_1..Class_N`.
    pub classes: Vec<ClassRoster>,
    /// Reserved overflow roster (`Class_X`).
    pub overflow: ClassRoster,
    /// Soft degradations recorded during the run.
    pub notes: Vec<PlacementNote>,
}

impl Partition {
    /// Creates an empty partition with `num_classes` destination rosters.
    pub fn empty(num_classes: u32) -> Self {
        Self {
            classes: (1..=num_classes)
                .map(|n| ClassRoster::new(ClassId::Class(n)))
                .collect(),
            overflow: ClassRoster::new(ClassId::Overflow),
            notes: Vec::new(),
        }
    }

    /// Roster for the given class id, if present.
    pub fn roster(&self, id: ClassId) -> Option<&ClassRoster> {
        match id {
            ClassId::Overflow => Some(&self.overflow),
            ClassId::Class(_) => self.classes.iter().find(|r| r.id == id),
        }
    }

    /// Total population across destination classes and overflow.
    pub fn total_students(&self) -> usize {
        self.classes.iter().map(ClassRoster::len).sum::<usize>() + self.overflow.len()
    }

    /// Iterates over all rosters, overflow last.
    pub fn all_rosters(&self) -> impl Iterator<Item = &ClassRoster> {
        self.classes.iter().chain(std::iter::once(&self.overflow))
    }

    /// Finds the class holding the given student id.
    pub fn class_of(&self, student_id: &str) -> Option<ClassId> {
        self.all_rosters()
            .find(|r| r.contains(student_id))
            .map(|r| r.id)
    }

    /// Whether any student id appears in more than one roster.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        for roster in self.all_rosters() {
            for s in &roster.students {
                if !seen.insert(s.id.as_str()) {
                    return true;
                }
            }
        }
        false
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: PlacementNote) {
        self.notes.push(note);
    }

    /// Notes of a given kind.
    pub fn notes_of_kind(&self, kind: &PlacementNoteKind) -> Vec<&PlacementNote> {
        self.notes.iter().filter(|n| &n.kind == kind).collect()
    }
}
