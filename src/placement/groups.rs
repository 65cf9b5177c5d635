//! Stay-together group placement.
//!
//! Constraint groups are placed before any other student so that a
//! group can never find its class already full of better-scoring
//! placements. Class visiting order, group order, and member order are
//! all shuffled under the injected RNG to avoid systematic bias toward
//! low-index classes, while keeping runs reproducible for a given seed.
//!
//! # Algorithm
//!
//! For each group (in shuffled order), resolve every member id against
//! the student pool; ids that match nothing produce an
//! `UnresolvedGroupMember` note and are skipped. All resolved members
//! are committed together to the first class — in shuffled visiting
//! order — whose current size is below `ceil(placed / num_classes) + 1`,
//! an approximate round-robin that tolerates slight overfill. Placed
//! students leave the pool handed to later stages.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Partition, PlacementNote, StayTogetherGroup, Student};

/// Places stay-together groups into the partition.
///
/// Consumes placed students from `pool` and returns the remaining
/// (unplaced) students. Unresolvable member ids are recorded as notes
/// on the partition, never raised.
pub fn place_groups<R: Rng>(
    partition: &mut Partition,
    groups: &[StayTogetherGroup],
    mut pool: Vec<Student>,
    rng: &mut R,
) -> Vec<Student> {
    let num_classes = partition.classes.len();
    if num_classes == 0 {
        return pool;
    }

    let mut class_order: Vec<usize> = (0..num_classes).collect();
    class_order.shuffle(rng);

    let mut group_order: Vec<usize> = (0..groups.len()).collect();
    group_order.shuffle(rng);

    let mut placed_total: usize = partition.classes.iter().map(|r| r.len()).sum();

    for &gi in &group_order {
        let mut members = groups[gi].members.clone();
        members.shuffle(rng);

        let mut resolved = Vec::new();
        for member_id in &members {
            match pool.iter().position(|s| &s.id == member_id) {
                Some(idx) => resolved.push(pool.remove(idx)),
                None => partition.add_note(PlacementNote::unresolved_member(member_id.clone())),
            }
        }
        if resolved.is_empty() {
            continue;
        }

        placed_total += resolved.len();
        let target = pick_class(partition, &class_order, placed_total, num_classes);
        for student in resolved {
            partition.classes[target].push(student);
        }
    }

    pool
}

/// First class in visiting order whose size is under the running cap,
/// falling back to the smallest class when every size is at the cap.
fn pick_class(
    partition: &Partition,
    class_order: &[usize],
    placed_total: usize,
    num_classes: usize,
) -> usize {
    let cap = placed_total.div_ceil(num_classes) + 1;
    class_order
        .iter()
        .copied()
        .find(|&i| partition.classes[i].len() < cap)
        .unwrap_or_else(|| {
            class_order
                .iter()
                .copied()
                .min_by_key(|&i| partition.classes[i].len())
                .unwrap_or(0)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PlacementNoteKind};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn make_pool(n: usize) -> Vec<Student> {
        (0..n)
            .map(|i| {
                let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
                Student::new(format!("s{i}"), gender, "1")
            })
            .collect()
    }

    #[test]
    fn test_group_members_co_located() {
        let mut partition = Partition::empty(3);
        let groups = vec![StayTogetherGroup::new(["s0", "s3", "s6"])];
        let mut rng = SmallRng::seed_from_u64(7);

        let remaining = place_groups(&mut partition, &groups, make_pool(9), &mut rng);

        assert_eq!(remaining.len(), 6);
        let class = partition.class_of("s0").unwrap();
        assert_eq!(partition.class_of("s3"), Some(class));
        assert_eq!(partition.class_of("s6"), Some(class));
        assert!(partition.notes.is_empty());
    }

    #[test]
    fn test_unresolved_member_skipped_with_note() {
        let mut partition = Partition::empty(2);
        let groups = vec![StayTogetherGroup::new(["s0", "ghost"])];
        let mut rng = SmallRng::seed_from_u64(1);

        let remaining = place_groups(&mut partition, &groups, make_pool(4), &mut rng);

        // The existing member is placed normally, not in overflow.
        assert!(partition.class_of("s0").is_some());
        assert_ne!(
            partition.class_of("s0"),
            Some(crate::models::ClassId::Overflow)
        );
        assert_eq!(remaining.len(), 3);

        let notes = partition.notes_of_kind(&PlacementNoteKind::UnresolvedGroupMember);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].entity_id, "ghost");
    }

    #[test]
    fn test_fully_unresolved_group_has_no_effect() {
        let mut partition = Partition::empty(2);
        let groups = vec![StayTogetherGroup::new(["ghost1", "ghost2"])];
        let mut rng = SmallRng::seed_from_u64(1);

        let remaining = place_groups(&mut partition, &groups, make_pool(4), &mut rng);

        assert_eq!(remaining.len(), 4);
        assert_eq!(partition.total_students(), 0);
        assert_eq!(partition.notes.len(), 2);
    }

    #[test]
    fn test_multiple_groups_spread_by_size_cap() {
        // Three 2-student groups across three classes: the size cap
        // keeps any single class from taking them all.
        let mut partition = Partition::empty(3);
        let groups = vec![
            StayTogetherGroup::new(["s0", "s1"]),
            StayTogetherGroup::new(["s2", "s3"]),
            StayTogetherGroup::new(["s4", "s5"]),
        ];
        let mut rng = SmallRng::seed_from_u64(11);

        let remaining = place_groups(&mut partition, &groups, make_pool(6), &mut rng);

        assert!(remaining.is_empty());
        assert_eq!(partition.total_students(), 6);
        let max_size = partition.classes.iter().map(|r| r.len()).max().unwrap();
        assert!(max_size <= 4, "size cap breached: {max_size}");
        assert!(!partition.has_duplicates());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let groups = vec![
            StayTogetherGroup::new(["s0", "s1"]),
            StayTogetherGroup::new(["s2", "s3"]),
        ];

        let run = |seed: u64| {
            let mut partition = Partition::empty(3);
            let mut rng = SmallRng::seed_from_u64(seed);
            place_groups(&mut partition, &groups, make_pool(8), &mut rng);
            partition
                .all_rosters()
                .map(|r| r.students.iter().map(|s| s.id.clone()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_no_groups_returns_pool_untouched() {
        let mut partition = Partition::empty(2);
        let mut rng = SmallRng::seed_from_u64(1);
        let remaining = place_groups(&mut partition, &[], make_pool(5), &mut rng);
        assert_eq!(remaining.len(), 5);
        assert_eq!(partition.total_students(), 0);
    }
}
