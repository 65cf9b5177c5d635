//! Partitioning domain models.
//!
//! Provides the core data types for describing a partitioning problem
//! and its solution. The vocabulary is school class assignment, but the
//! structure is generic constrained bin packing: items with categorical
//! attributes, co-location constraints, and capacity-capped bins.
//!
//! # Domain Mappings
//!
//! | classform | School | Team building | Shift planning |
//! |-----------|--------|---------------|----------------|
//! | Student | Student | Candidate | Worker |
//! | Origin group | Previous class | Department | Home crew |
//! | ClassRoster | New class | Team | Shift |
//! | StayTogetherGroup | Friend/sibling set | Pair request | Buddy pair |

mod constraint;
mod roster;
mod student;
mod weights;

pub use constraint::StayTogetherGroup;
pub use roster::{ClassId, ClassRoster, GenderCaps, Partition, PlacementNote, PlacementNoteKind};
pub use student::{Gender, Grade, Student};
pub use weights::WeightTable;
