//! Greedy multi-factor placement.
//!
//! Assigns every student left after group placement. The visiting
//! order is shuffled under the injected RNG; each student is then
//! offered to classes in ascending cost order and committed to the
//! first one whose per-origin gender cap still has room.
//!
//! # Cost
//!
//! ```text
//! cost(class, student) = origin_count[class][student.origin]
//!                      + |males_after_add - females_after_add|
//!                      + weighted_score(student)
//! ```
//!
//! Lower origin counts favor origin-group diversity, the gender term
//! favors classes the student would make more even, and the score term
//! steers heavy (weak-grade) students toward lighter classes. Ties
//! break toward the smaller roster so underfilled classes catch up.
//!
//! Placement never fails hard: a student no class can legally take is
//! routed to the overflow roster with a `PlacementInfeasible` note.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ClassRoster, Gender, GenderCaps, Partition, PlacementNote, Student, WeightTable};
use crate::scoring::student_score;

/// Running per-class counters maintained during the greedy sweep.
struct ClassCounters {
    origin_total: HashMap<String, usize>,
    origin_male: HashMap<String, usize>,
    origin_female: HashMap<String, usize>,
    males: usize,
    females: usize,
}

impl ClassCounters {
    fn from_roster(roster: &ClassRoster) -> Self {
        let mut c = Self {
            origin_total: HashMap::new(),
            origin_male: HashMap::new(),
            origin_female: HashMap::new(),
            males: 0,
            females: 0,
        };
        for s in &roster.students {
            c.record(s);
        }
        c
    }

    fn record(&mut self, student: &Student) {
        *self.origin_total.entry(student.origin.clone()).or_insert(0) += 1;
        match student.gender {
            Gender::Male => {
                self.males += 1;
                *self.origin_male.entry(student.origin.clone()).or_insert(0) += 1;
            }
            Gender::Female => {
                self.females += 1;
                *self.origin_female.entry(student.origin.clone()).or_insert(0) += 1;
            }
        }
    }

    fn origin_count(&self, origin: &str) -> usize {
        self.origin_total.get(origin).copied().unwrap_or(0)
    }

    fn origin_gender_count(&self, origin: &str, gender: Gender) -> usize {
        let map = match gender {
            Gender::Male => &self.origin_male,
            Gender::Female => &self.origin_female,
        };
        map.get(origin).copied().unwrap_or(0)
    }

    /// Gender imbalance after hypothetically adding the student.
    fn imbalance_after(&self, gender: Gender) -> i64 {
        let (m, f) = match gender {
            Gender::Male => (self.males + 1, self.females),
            Gender::Female => (self.males, self.females + 1),
        };
        (m as i64 - f as i64).abs()
    }
}

/// Places all remaining students into the partition.
///
/// Counters are seeded from rosters already populated by group
/// placement, so earlier commitments count toward diversity and
/// gender balance. Students that cannot be legally placed under
/// `caps` go to overflow.
pub fn place_remaining<R: Rng>(
    partition: &mut Partition,
    mut students: Vec<Student>,
    weights: &WeightTable,
    caps: GenderCaps,
    rng: &mut R,
) {
    students.shuffle(rng);

    let mut counters: Vec<ClassCounters> = partition
        .classes
        .iter()
        .map(ClassCounters::from_roster)
        .collect();

    for student in students {
        let score = student_score(&student, weights);

        let mut ranked: Vec<(i64, usize, usize)> = counters
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let cost = c.origin_count(&student.origin) as i64
                    + c.imbalance_after(student.gender)
                    + score;
                (cost, partition.classes[i].len(), i)
            })
            .collect();
        ranked.sort();

        let cap = caps.for_gender(student.gender);
        let target = ranked.iter().find(|&&(_, _, i)| {
            counters[i].origin_gender_count(&student.origin, student.gender) < cap
        });

        match target {
            Some(&(_, _, i)) => {
                counters[i].record(&student);
                partition.classes[i].push(student);
            }
            None => {
                partition.add_note(PlacementNote::infeasible(student.id.clone()));
                partition.overflow.push(student);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassId, Grade, PlacementNoteKind};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn weights() -> WeightTable {
        WeightTable::new().with_weight("academic", 1)
    }

    fn make_student(id: &str, gender: Gender, origin: &str, grade: Grade) -> Student {
        Student::new(id, gender, origin).with_grade("academic", grade)
    }

    fn uniform_pool() -> Vec<Student> {
        // 4 males, 4 females, identical grades, single origin.
        (0..8)
            .map(|i| {
                let gender = if i < 4 { Gender::Male } else { Gender::Female };
                make_student(&format!("s{i}"), gender, "1", Grade::B)
            })
            .collect()
    }

    #[test]
    fn test_uniform_pool_splits_evenly() {
        let mut partition = Partition::empty(2);
        let mut rng = SmallRng::seed_from_u64(3);

        place_remaining(
            &mut partition,
            uniform_pool(),
            &weights(),
            GenderCaps::unlimited(),
            &mut rng,
        );

        for roster in &partition.classes {
            assert_eq!(roster.len(), 4);
            assert_eq!(roster.gender_count(Gender::Male), 2);
            assert_eq!(roster.gender_count(Gender::Female), 2);
        }
        assert!(partition.overflow.is_empty());
        assert!(!partition.has_duplicates());
    }

    #[test]
    fn test_conservation() {
        let mut partition = Partition::empty(3);
        let mut rng = SmallRng::seed_from_u64(5);
        let pool: Vec<Student> = (0..20)
            .map(|i| {
                let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
                make_student(
                    &format!("s{i}"),
                    gender,
                    &format!("{}", i % 4),
                    Grade::ALL[i % 4],
                )
            })
            .collect();

        place_remaining(&mut partition, pool, &weights(), GenderCaps::new(2, 2), &mut rng);

        assert_eq!(partition.total_students(), 20);
        assert!(!partition.has_duplicates());
    }

    #[test]
    fn test_caps_respected() {
        let mut partition = Partition::empty(2);
        let mut rng = SmallRng::seed_from_u64(9);
        // 6 males, one origin, cap of 2 per class → 4 placeable, 2 overflow.
        let pool: Vec<Student> = (0..6)
            .map(|i| make_student(&format!("m{i}"), Gender::Male, "1", Grade::B))
            .collect();

        place_remaining(&mut partition, pool, &weights(), GenderCaps::new(2, 2), &mut rng);

        for roster in &partition.classes {
            assert!(roster.origin_gender_count("1", Gender::Male) <= 2);
        }
        assert_eq!(partition.overflow.len(), 2);
        let notes = partition.notes_of_kind(&PlacementNoteKind::PlacementInfeasible);
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_counters_seeded_from_existing_rosters() {
        let mut partition = Partition::empty(2);
        // Class_1 pre-filled with two origin-1 males by group placement.
        partition.classes[0].push(make_student("g0", Gender::Male, "1", Grade::B));
        partition.classes[0].push(make_student("g1", Gender::Male, "1", Grade::B));
        let mut rng = SmallRng::seed_from_u64(2);

        let pool = vec![make_student("s0", Gender::Male, "1", Grade::B)];
        place_remaining(&mut partition, pool, &weights(), GenderCaps::new(2, 2), &mut rng);

        // Class_1 is at its cap for origin-1 males, so s0 must land in Class_2.
        assert_eq!(partition.class_of("s0"), Some(ClassId::Class(2)));
    }

    #[test]
    fn test_never_fails_hard_with_zero_capacity() {
        let mut partition = Partition::empty(2);
        let mut rng = SmallRng::seed_from_u64(2);
        let pool = vec![make_student("s0", Gender::Female, "1", Grade::A)];

        place_remaining(&mut partition, pool, &weights(), GenderCaps::new(0, 0), &mut rng);

        assert_eq!(partition.class_of("s0"), Some(ClassId::Overflow));
        assert_eq!(partition.total_students(), 1);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let run = |seed: u64| {
            let mut partition = Partition::empty(3);
            let mut rng = SmallRng::seed_from_u64(seed);
            place_remaining(
                &mut partition,
                uniform_pool(),
                &weights(),
                GenderCaps::unlimited(),
                &mut rng,
            );
            partition
                .all_rosters()
                .map(|r| r.students.iter().map(|s| s.id.clone()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(8), run(8));
    }
}
