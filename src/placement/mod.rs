//! Placement stages.
//!
//! The three stages run in a fixed order over one mutable
//! [`Partition`](crate::models::Partition):
//!
//! 1. **`groups`** — stay-together groups are committed first, each to
//!    a single class, so no later stage can split them.
//! 2. **`greedy`** — every remaining student is placed by a
//!    multi-factor cost ranking; students no class can legally take go
//!    to overflow.
//! 3. **`swap`** — a bounded first-improvement swap search narrows the
//!    score gap between classes without breaking constraints.

pub mod greedy;
pub mod groups;
pub mod swap;

pub use greedy::place_remaining;
pub use groups::place_groups;
pub use swap::{max_pairwise_gap, optimize, OptimizeOutcome};
