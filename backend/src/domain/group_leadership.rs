//! Leadership slots of a group.

use serde::{Deserialize, Serialize};

use crate::domain::MemberId;

/// The three leadership slots of a group.
///
/// Each slot is empty or names one member of the group. Membership of the
/// referenced member is enforced by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLeadership {
    pub president: Option<MemberId>,
    pub vice_president_1: Option<MemberId>,
    pub vice_president_2: Option<MemberId>,
}

impl GroupLeadership {
    /// Whether `member` occupies any of the slots.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{GroupLeadership, MemberId};
    ///
    /// let president = MemberId::random();
    /// let leadership = GroupLeadership {
    ///     president: Some(president),
    ///     ..GroupLeadership::default()
    /// };
    /// assert!(leadership.includes(&president));
    /// assert!(!leadership.includes(&MemberId::random()));
    /// ```
    pub fn includes(&self, member: &MemberId) -> bool {
        [self.president, self.vice_president_1, self.vice_president_2]
            .iter()
            .flatten()
            .any(|slot| slot == member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vice_presidents_count_as_leaders() {
        let first = MemberId::random();
        let second = MemberId::random();
        let leadership = GroupLeadership {
            president: None,
            vice_president_1: Some(first),
            vice_president_2: Some(second),
        };
        assert!(leadership.includes(&first));
        assert!(leadership.includes(&second));
    }

    #[rstest]
    fn empty_slots_include_nobody() {
        assert!(!GroupLeadership::default().includes(&MemberId::random()));
    }
}
