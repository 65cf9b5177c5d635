//! Pairwise-swap local search.
//!
//! Narrows the mean-score gap between destination classes by swapping
//! same-gender students across class pairs. First-improvement policy:
//! the first legal swap that strictly shrinks a pair's absolute
//! mean-score difference executes immediately and the pair is
//! re-scanned. A full pass over every class pair with no executed swap
//! is convergence; otherwise the pass budget bounds the run.
//!
//! A pairwise improvement can still widen the gap between one of the
//! swapped classes and a third class, so the walk tracks the best
//! rosters seen under the maximum pairwise mean gap and restores them
//! before returning. The returned partition is therefore never worse
//! than the input under that metric.
//!
//! The search is deliberately local and greedy: it reaches a state with
//! no single improving pairwise swap, not a global optimum.
//!
//! # Legality
//!
//! A swap is rejected when either student would leave co-located
//! stay-together groupmates behind, or when the incoming student would
//! push the receiving class over its per-origin gender cap. Overflow
//! students are not touched; re-admitting them is a placement decision,
//! not a balance move.
//!
//! # Complexity
//! O(passes × classes² × class_size²) mean-difference comparisons.
//!
//! # Reference
//! Hoos & Stützle (2005), "Stochastic Local Search", Ch. 1-2

use crate::models::{
    ClassRoster, GenderCaps, Partition, PlacementNote, StayTogetherGroup, Student, WeightTable,
};
use crate::scoring::{roster_mean_score, roster_total_score, student_score};

/// How a local-search run ended. Both outcomes are non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizeOutcome {
    /// A full pass found no legal improving swap.
    Converged {
        /// Passes that executed at least one swap before convergence.
        passes: usize,
        /// Total swaps executed.
        swaps: usize,
    },
    /// The pass budget ran out before convergence.
    BudgetExhausted {
        /// Total swaps executed.
        swaps: usize,
    },
}

impl OptimizeOutcome {
    /// Total swaps executed, regardless of outcome.
    pub fn swaps(&self) -> usize {
        match *self {
            OptimizeOutcome::Converged { swaps, .. } => swaps,
            OptimizeOutcome::BudgetExhausted { swaps } => swaps,
        }
    }

    /// Whether the search converged within the budget.
    pub fn converged(&self) -> bool {
        matches!(self, OptimizeOutcome::Converged { .. })
    }
}

/// Refines the partition by first-improvement pairwise swaps.
///
/// Runs up to `max_iterations` passes. Whether the walk converges or
/// exhausts its budget, the rosters returned are the best state seen
/// under [`max_pairwise_gap`]; on budget exhaustion an
/// `OptimizationBudgetExhausted` note is also recorded.
pub fn optimize(
    partition: &mut Partition,
    weights: &WeightTable,
    groups: &[StayTogetherGroup],
    caps: GenderCaps,
    max_iterations: usize,
) -> OptimizeOutcome {
    let mut swaps = 0;
    let mut best_classes = partition.classes.clone();
    let mut best_gap = max_pairwise_gap(&partition.classes, weights);

    let mut converged_at = None;

    for pass in 0..max_iterations {
        let mut swapped_this_pass = 0;

        for a in 0..partition.classes.len() {
            for b in (a + 1)..partition.classes.len() {
                // Re-scan the pair after every executed swap.
                while let Some((ia, ib)) =
                    find_improving_swap(&partition.classes[a], &partition.classes[b], weights, groups, caps)
                {
                    let student_a = partition.classes[a].students[ia].clone();
                    let student_b = std::mem::replace(
                        &mut partition.classes[b].students[ib],
                        student_a,
                    );
                    partition.classes[a].students[ia] = student_b;
                    swaps += 1;
                    swapped_this_pass += 1;

                    let gap = max_pairwise_gap(&partition.classes, weights);
                    if gap < best_gap {
                        best_gap = gap;
                        best_classes.clone_from(&partition.classes);
                    }
                }
            }
        }

        if swapped_this_pass == 0 {
            converged_at = Some(pass);
            break;
        }
    }

    // A pair-local improvement can widen the gap to a third class;
    // hand back the best global state instead of the last one.
    if max_pairwise_gap(&partition.classes, weights) > best_gap {
        partition.classes = best_classes;
    }

    match converged_at {
        Some(passes) => OptimizeOutcome::Converged { passes, swaps },
        None => {
            partition.add_note(PlacementNote::budget_exhausted(max_iterations));
            OptimizeOutcome::BudgetExhausted { swaps }
        }
    }
}

/// Largest absolute difference between any two class mean scores.
pub fn max_pairwise_gap(classes: &[ClassRoster], weights: &WeightTable) -> f64 {
    let means: Vec<f64> = classes
        .iter()
        .map(|r| roster_mean_score(r, weights))
        .collect();

    let mut gap = 0.0_f64;
    for i in 0..means.len() {
        for j in (i + 1)..means.len() {
            gap = gap.max((means[i] - means[j]).abs());
        }
    }
    gap
}

/// First legal swap between the two rosters that strictly shrinks the
/// absolute difference of their mean scores, as `(index_a, index_b)`.
fn find_improving_swap(
    roster_a: &ClassRoster,
    roster_b: &ClassRoster,
    weights: &WeightTable,
    groups: &[StayTogetherGroup],
    caps: GenderCaps,
) -> Option<(usize, usize)> {
    if roster_a.is_empty() || roster_b.is_empty() {
        return None;
    }

    let total_a = roster_total_score(roster_a, weights);
    let total_b = roster_total_score(roster_b, weights);
    let len_a = roster_a.len() as f64;
    let len_b = roster_b.len() as f64;
    let current_gap = (total_a as f64 / len_a - total_b as f64 / len_b).abs();

    for (ia, sa) in roster_a.students.iter().enumerate() {
        for (ib, sb) in roster_b.students.iter().enumerate() {
            if sa.gender != sb.gender {
                continue;
            }
            if !swap_is_legal(sa, sb, roster_a, roster_b, groups, caps) {
                continue;
            }

            let delta = student_score(sb, weights) - student_score(sa, weights);
            let new_gap = ((total_a + delta) as f64 / len_a - (total_b - delta) as f64 / len_b).abs();
            if new_gap < current_gap {
                return Some((ia, ib));
            }
        }
    }
    None
}

/// Whether exchanging `sa` (in `roster_a`) with `sb` (in `roster_b`)
/// breaks a stay-together group or a per-origin gender cap.
fn swap_is_legal(
    sa: &Student,
    sb: &Student,
    roster_a: &ClassRoster,
    roster_b: &ClassRoster,
    groups: &[StayTogetherGroup],
    caps: GenderCaps,
) -> bool {
    if locked_by_group(sa, roster_a, groups) || locked_by_group(sb, roster_b, groups) {
        return false;
    }

    // Same-gender swap keeps gender counts intact; origin counts move
    // only when the origins differ.
    if sa.origin != sb.origin {
        let cap = caps.for_gender(sa.gender);
        if roster_a.origin_gender_count(&sb.origin, sb.gender) >= cap {
            return false;
        }
        if roster_b.origin_gender_count(&sa.origin, sa.gender) >= cap {
            return false;
        }
    }
    true
}

/// A student with a co-located groupmate cannot leave the roster
/// without splitting the group.
fn locked_by_group(
    student: &Student,
    roster: &ClassRoster,
    groups: &[StayTogetherGroup],
) -> bool {
    groups.iter().any(|g| {
        g.contains(&student.id)
            && roster
                .students
                .iter()
                .any(|other| other.id != student.id && g.contains(&other.id))
    })
}
