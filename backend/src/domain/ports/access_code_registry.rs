//! Port for probing stored access codes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::CodeNamespace;

use super::define_port_error;

define_port_error! {
    /// Errors raised by access code registry adapters.
    pub enum AccessCodeRegistryError {
        /// Registry connection could not be established.
        Connection { message: String } => "access code registry connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "access code registry query failed: {message}",
    }
}

/// Existence checks over `members.member_code` and `groups.access_code`.
///
/// Adapters compare the code exactly; callers pass it already normalised.
/// Persisting codes is out of scope: true uniqueness is enforced by unique
/// constraints in the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessCodeRegistry: Send + Sync {
    /// Whether any record in `namespace` other than `exclude_id` holds `code`.
    async fn code_exists(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AccessCodeRegistryError>;
}

/// Fixture implementation holding no codes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccessCodeRegistry;

#[async_trait]
impl AccessCodeRegistry for FixtureAccessCodeRegistry {
    async fn code_exists(
        &self,
        _namespace: CodeNamespace,
        _code: &str,
        _exclude_id: Option<Uuid>,
    ) -> Result<bool, AccessCodeRegistryError> {
        Ok(false)
    }
}
