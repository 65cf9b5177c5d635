//! Co-location constraint model.
//!
//! A stay-together group names students that must end up in the same
//! destination class. Groups are independent of each other; a student
//! is expected to appear in at most one group.

use serde::{Deserialize, Serialize};

/// A set of student ids that must be co-located in one class.
///
/// Member order is preserved from the input; placement shuffles its own
/// working copy. Ids that match no input student are skipped with a
/// warning rather than failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayTogetherGroup {
    /// Ordered member student ids.
    pub members: Vec<String>,
}

impl StayTogetherGroup {
    /// Creates a group from member ids.
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given student id belongs to this group.
    pub fn contains(&self, student_id: &str) -> bool {
        self.members.iter().any(|m| m == student_id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_contains() {
        let g = StayTogetherGroup::new(["a", "b", "c"]);
        assert!(g.contains("b"));
        assert!(!g.contains("d"));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_empty_group() {
        let g = StayTogetherGroup::default();
        assert!(g.is_empty());
        assert!(!g.contains("a"));
    }
}
