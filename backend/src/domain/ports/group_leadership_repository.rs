//! Port for reading the leadership slots of a group.

use async_trait::async_trait;

use crate::domain::{GroupId, GroupLeadership};

use super::define_port_error;

define_port_error! {
    /// Errors raised by group repository adapters.
    pub enum GroupRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "group repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "group repository query failed: {message}",
    }
}

/// Read access to `groups.{president_id, vice_president_1_id, vice_president_2_id}`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupLeadershipRepository: Send + Sync {
    /// Fetch the leadership slots of a group.
    ///
    /// Returns `None` when no group has this id.
    async fn find_leadership(
        &self,
        group_id: &GroupId,
    ) -> Result<Option<GroupLeadership>, GroupRepositoryError>;
}

/// Fixture implementation that knows no groups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGroupLeadershipRepository;

#[async_trait]
impl GroupLeadershipRepository for FixtureGroupLeadershipRepository {
    async fn find_leadership(
        &self,
        _group_id: &GroupId,
    ) -> Result<Option<GroupLeadership>, GroupRepositoryError> {
        Ok(None)
    }
}
