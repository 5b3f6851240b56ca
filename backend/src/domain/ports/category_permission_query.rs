//! Driving port for category access decisions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, GroupId, Identity, PermissionResult};

/// Everything needed to decide what a caller may do with a category.
///
/// Identifiers are optional because callers often resolve permissions while
/// a screen is still loading; incomplete requests resolve to view-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    pub category_id: Option<CategoryId>,
    pub group_id: Option<GroupId>,
    pub identity: Identity,
}

/// Resolves [`PermissionResult`] values.
///
/// Resolution never fails: store outages degrade to
/// [`PermissionResult::view_only`] for the current call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryPermissionQuery: Send + Sync {
    /// Compute the caller's access to the requested category.
    async fn resolve(&self, request: &PermissionRequest) -> PermissionResult;
}
