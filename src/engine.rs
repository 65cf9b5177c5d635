//! The full placement pipeline.
//!
//! Wraps the three placement stages behind a single request/engine
//! pair: validate → place groups → place remaining → optimize. The
//! run is single-threaded and synchronous; each stage fully consumes
//! the previous stage's output. All randomness flows from the
//! request's seed, so a given seed and input always reproduce the
//! same partition.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::models::{GenderCaps, Partition, StayTogetherGroup, Student, WeightTable};
use crate::placement::{optimize, place_groups, place_remaining};
use crate::validation::{validate_input, ValidationError};

/// Input container for a partition run.
///
/// # Example
///
/// ```
/// use classform::engine::{PartitionRequest, Partitioner};
/// use classform::models::{Gender, Grade, Student, WeightTable};
///
/// let students = vec![
///     Student::new("s1", Gender::Male, "1").with_grade("academic", Grade::B),
///     Student::new("s2", Gender::Female, "1").with_grade("academic", Grade::B),
/// ];
/// let weights = WeightTable::new().with_weight("academic", 1);
/// let request = PartitionRequest::new(students, weights, 2).with_seed(42);
///
/// let partition = Partitioner::new().partition(&request).unwrap();
/// assert_eq!(partition.total_students(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionRequest {
    /// Students to partition.
    pub students: Vec<Student>,
    /// Stay-together groups.
    pub groups: Vec<StayTogetherGroup>,
    /// Weight table, read-only for the whole run.
    pub weights: WeightTable,
    /// Target number of destination classes.
    pub num_classes: u32,
    /// Per-origin gender caps per destination class.
    pub caps: GenderCaps,
    /// RNG seed for all shuffled orders.
    pub seed: u64,
}

impl PartitionRequest {
    /// Creates a request with unlimited caps and seed 0.
    pub fn new(students: Vec<Student>, weights: WeightTable, num_classes: u32) -> Self {
        Self {
            students,
            groups: Vec::new(),
            weights,
            num_classes,
            caps: GenderCaps::unlimited(),
            seed: 0,
        }
    }

    /// Sets the stay-together groups.
    pub fn with_groups(mut self, groups: Vec<StayTogetherGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the per-origin gender caps.
    pub fn with_caps(mut self, caps: GenderCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Runs the placement pipeline over a request.
///
/// Policy lives here (pass budget, optimizer toggle); data lives on
/// the request.
#[derive(Debug, Clone)]
pub struct Partitioner {
    max_iterations: usize,
    run_optimizer: bool,
}

impl Partitioner {
    /// Creates a partitioner with a 100-pass optimizer budget.
    pub fn new() -> Self {
        Self {
            max_iterations: 100,
            run_optimizer: true,
        }
    }

    /// Sets the optimizer pass budget.
    pub fn with_pass_budget(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enables or disables the swap optimizer.
    pub fn with_optimizer(mut self, enabled: bool) -> Self {
        self.run_optimizer = enabled;
        self
    }

    /// Runs the full pipeline.
    ///
    /// Fails fast on structural input violations; every other problem
    /// degrades into a note on the returned partition.
    pub fn partition(&self, request: &PartitionRequest) -> Result<Partition, Vec<ValidationError>> {
        validate_input(&request.students, &request.weights, request.num_classes)?;

        let mut rng = SmallRng::seed_from_u64(request.seed);
        let mut partition = Partition::empty(request.num_classes);

        let remaining = place_groups(
            &mut partition,
            &request.groups,
            request.students.clone(),
            &mut rng,
        );
        place_remaining(
            &mut partition,
            remaining,
            &request.weights,
            request.caps,
            &mut rng,
        );

        if self.run_optimizer {
            optimize(
                &mut partition,
                &request.weights,
                &request.groups,
                request.caps,
                self.max_iterations,
            );
        }

        Ok(partition)
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new()
    }
}
