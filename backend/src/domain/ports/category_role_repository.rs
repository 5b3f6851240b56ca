//! Port for reading category-scoped role assignments.

use async_trait::async_trait;

use crate::domain::{CategoryId, CategoryRole, MemberId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category role repository adapters.
    pub enum CategoryRoleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "category role repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "category role repository query failed: {message}",
        /// The stored role name is not one the domain knows.
        UnknownRole { value: String } => "category role repository returned unknown role: {value}",
    }
}

/// Read access to `category_roles`.
///
/// Only active assignments are visible through this port. The store keeps
/// at most one active assignment per (category, member) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRoleRepository: Send + Sync {
    /// Fetch the member's active role in the category, if any.
    async fn find_active_role(
        &self,
        category_id: &CategoryId,
        member_id: &MemberId,
    ) -> Result<Option<CategoryRole>, CategoryRoleRepositoryError>;
}

/// Fixture implementation in which nobody holds a role.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRoleRepository;

#[async_trait]
impl CategoryRoleRepository for FixtureCategoryRoleRepository {
    async fn find_active_role(
        &self,
        _category_id: &CategoryId,
        _member_id: &MemberId,
    ) -> Result<Option<CategoryRole>, CategoryRoleRepositoryError> {
        Ok(None)
    }
}
