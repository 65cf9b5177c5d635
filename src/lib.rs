//! Class partitioning engine.
//!
//! Splits a population of students (already grouped by their previous
//! class) into a target number of destination classes, honoring
//! stay-together constraints and balancing gender ratio, origin-group
//! diversity, and a weighted performance score.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Grade`, `WeightTable`,
//!   `StayTogetherGroup`, `ClassRoster`, `Partition`, `PlacementNote`
//! - **`scoring`**: Weighted grade scoring for students and rosters
//! - **`validation`**: Fail-fast structural input checks
//! - **`placement`**: Constraint-group placement, greedy balancing,
//!   and pairwise-swap local search
//! - **`summary`**: Per-class descriptive statistics
//! - **`engine`**: The full placement pipeline behind a single request
//! - **`generator`**: Seeded sample population generation
//!
//! # Pipeline
//!
//! Constraint groups are placed first, the remaining students are
//! assigned greedily by a multi-factor cost, and a bounded
//! first-improvement swap search then reduces score imbalance. Every
//! stage degrades instead of failing: students that cannot be legally
//! placed land in a reserved overflow class and the run continues.
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and
//!   Computer Implementations" (bin packing with side constraints)
//! - Hoos & Stützle (2005), "Stochastic Local Search: Foundations and
//!   Applications"

pub mod engine;
pub mod generator;
pub mod models;
pub mod placement;
pub mod scoring;
pub mod summary;
pub mod validation;
