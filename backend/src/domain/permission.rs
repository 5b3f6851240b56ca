//! Category access decisions.

use serde::{Deserialize, Serialize};

use crate::domain::CategoryRole;

/// Access decision for one caller on one financial category.
///
/// Values are computed fresh per query and never cached by the domain.
///
/// `can_view` is true for every resolvable identity: access to the screen
/// itself is guarded elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResult {
    pub can_view: bool,
    pub can_view_balance: bool,
    pub can_edit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CategoryRole>,
    pub is_group_leader: bool,
}

impl PermissionResult {
    /// Minimum privilege: view only.
    ///
    /// Returned for incomplete requests and whenever a store read fails.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::PermissionResult;
    ///
    /// let result = PermissionResult::view_only();
    /// assert!(result.can_view);
    /// assert!(!result.can_edit);
    /// ```
    pub const fn view_only() -> Self {
        Self {
            can_view: true,
            can_view_balance: false,
            can_edit: false,
            role: None,
            is_group_leader: false,
        }
    }

    /// Everything allowed; granted to administrators above category checks.
    pub const fn full_access() -> Self {
        Self {
            can_view: true,
            can_view_balance: true,
            can_edit: true,
            role: None,
            is_group_leader: false,
        }
    }

    /// Combine the facts read for a member.
    ///
    /// A lock blocks editing only for members holding neither a category
    /// role nor a leadership slot.
    pub fn for_member(is_group_leader: bool, role: Option<CategoryRole>, locked: bool) -> Self {
        let has_role = role.is_some();
        Self {
            can_view: true,
            can_view_balance: is_group_leader || has_role,
            can_edit: !locked || has_role || is_group_leader,
            role,
            is_group_leader,
        }
    }
}

impl Default for PermissionResult {
    fn default() -> Self {
        Self::view_only()
    }
}
