//! Category permission resolution.
//!
//! Precedence, in order:
//!
//! 1. administrators whose level bypasses category checks get full access;
//! 2. requests missing the category or the group get view-only access;
//! 3. identities without a member binding get view-only access;
//! 4. members are judged on group leadership, their active category role and
//!    the category lock.
//!
//! Store failures in step 4 are logged and degrade the call to view-only.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CategoryPermissionQuery, CategoryRoleRepository, CategoryRoleRepositoryError,
    FinancialCategoryRepository, FinancialCategoryRepositoryError, GroupLeadershipRepository,
    GroupRepositoryError, PermissionRequest,
};
use crate::domain::{CategoryId, GroupId, Identity, MemberId, PermissionResult};

/// Reasons the member path could not produce a decision.
#[derive(Debug, thiserror::Error)]
enum PermissionLookupError {
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),
    #[error(transparent)]
    Role(#[from] CategoryRoleRepositoryError),
    #[error(transparent)]
    Category(#[from] FinancialCategoryRepositoryError),
    #[error("group {0} not found")]
    MissingGroup(GroupId),
    #[error("financial category {0} not found")]
    MissingCategory(CategoryId),
}

/// Permission resolver implementing [`CategoryPermissionQuery`].
#[derive(Clone)]
pub struct CategoryPermissionService<G, R, C> {
    groups: Arc<G>,
    roles: Arc<R>,
    categories: Arc<C>,
}

impl<G, R, C> CategoryPermissionService<G, R, C> {
    /// Create a resolver over the given repositories.
    pub fn new(groups: Arc<G>, roles: Arc<R>, categories: Arc<C>) -> Self {
        Self {
            groups,
            roles,
            categories,
        }
    }
}

impl<G, R, C> CategoryPermissionService<G, R, C>
where
    G: GroupLeadershipRepository,
    R: CategoryRoleRepository,
    C: FinancialCategoryRepository,
{
    async fn member_permissions(
        &self,
        group_id: &GroupId,
        category_id: &CategoryId,
        member_id: &MemberId,
    ) -> Result<PermissionResult, PermissionLookupError> {
        let leadership = self
            .groups
            .find_leadership(group_id)
            .await?
            .ok_or(PermissionLookupError::MissingGroup(*group_id))?;
        let is_group_leader = leadership.includes(member_id);

        let role = self.roles.find_active_role(category_id, member_id).await?;

        let locked = self
            .categories
            .find_lock_state(category_id)
            .await?
            .ok_or(PermissionLookupError::MissingCategory(*category_id))?;

        Ok(PermissionResult::for_member(is_group_leader, role, locked))
    }
}

#[async_trait]
impl<G, R, C> CategoryPermissionQuery for CategoryPermissionService<G, R, C>
where
    G: GroupLeadershipRepository,
    R: CategoryRoleRepository,
    C: FinancialCategoryRepository,
{
    async fn resolve(&self, request: &PermissionRequest) -> PermissionResult {
        if matches!(
            request.identity,
            Identity::Admin { level, .. } if level.bypasses_category_checks()
        ) {
            return PermissionResult::full_access();
        }
        let member_id = request.identity.member_id();

        let (Some(category_id), Some(group_id)) = (request.category_id, request.group_id) else {
            debug!("permission request without category or group; granting view-only");
            return PermissionResult::view_only();
        };

        let Some(member_id) = member_id else {
            debug!(%group_id, %category_id, "identity has no member binding; granting view-only");
            return PermissionResult::view_only();
        };

        match self
            .member_permissions(&group_id, &category_id, &member_id)
            .await
        {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    %error,
                    %group_id,
                    %category_id,
                    %member_id,
                    "permission check failed; falling back to view-only"
                );
                PermissionResult::view_only()
            }
        }
    }
}

#[cfg(test)]
#[path = "permission_service_tests.rs"]
mod tests;
