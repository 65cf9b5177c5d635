//! Sample population generation.
//!
//! Builds an in-memory population of students spread across origin
//! groups, for demos and testing. Grades are drawn from a fixed
//! 20/30/30/20 distribution over A–D; one student per origin group is
//! tagged with each configured remark (mirroring rare attribute flags
//! like multicultural or welfare status in real rosters).
//!
//! All draws come from the injected RNG, so a seed fully determines
//! the population.

use rand::Rng;

use crate::models::{Gender, Grade, Student};

/// Shape of the generated population.
#[derive(Debug, Clone)]
pub struct PopulationSpec {
    /// Number of origin groups, named "1".."N".
    pub origin_groups: u32,
    /// Students per origin group.
    pub students_per_group: usize,
    /// Males per origin group; the rest are female.
    pub males_per_group: usize,
    /// Criteria to grade each student on.
    pub criteria: Vec<String>,
    /// Remarks to tag onto one random student per origin group each.
    pub rare_remarks: Vec<String>,
}

impl PopulationSpec {
    /// Creates a spec with the given group shape and no criteria.
    pub fn new(origin_groups: u32, students_per_group: usize, males_per_group: usize) -> Self {
        Self {
            origin_groups,
            students_per_group,
            males_per_group,
            criteria: Vec::new(),
            rare_remarks: Vec::new(),
        }
    }

    /// Adds a grading criterion.
    pub fn with_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.criteria.push(criterion.into());
        self
    }

    /// Adds a rare remark tag.
    pub fn with_rare_remark(mut self, remark: impl Into<String>) -> Self {
        self.rare_remarks.push(remark.into());
        self
    }

    /// Total population size.
    pub fn total(&self) -> usize {
        self.origin_groups as usize * self.students_per_group
    }
}

/// Draws a grade from the 20/30/30/20 distribution.
fn random_grade<R: Rng>(rng: &mut R) -> Grade {
    match rng.random_range(0..10) {
        0..=1 => Grade::A,
        2..=4 => Grade::B,
        5..=7 => Grade::C,
        _ => Grade::D,
    }
}

/// Generates a population from the spec.
///
/// Ids follow the `<group>-<seat>` convention (seat numbers zero-padded
/// to two digits), e.g. `3-07` for seat 7 of origin group 3.
pub fn generate<R: Rng>(spec: &PopulationSpec, rng: &mut R) -> Vec<Student> {
    let mut students = Vec::with_capacity(spec.total());

    for group in 1..=spec.origin_groups {
        let origin = group.to_string();

        let tagged: Vec<usize> = spec
            .rare_remarks
            .iter()
            .map(|_| {
                if spec.students_per_group == 0 {
                    0
                } else {
                    rng.random_range(0..spec.students_per_group)
                }
            })
            .collect();

        for seat in 0..spec.students_per_group {
            let gender = if seat < spec.males_per_group {
                Gender::Male
            } else {
                Gender::Female
            };
            let mut student = Student::new(format!("{}-{:02}", origin, seat + 1), gender, &origin);

            for criterion in &spec.criteria {
                student = student.with_grade(criterion.clone(), random_grade(rng));
            }
            for (remark, &tagged_seat) in spec.rare_remarks.iter().zip(&tagged) {
                if seat == tagged_seat {
                    student = student.with_remark(remark.clone());
                }
            }

            students.push(student);
        }
    }

    students
}
