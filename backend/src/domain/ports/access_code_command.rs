//! Driving port for issuing and checking access codes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccessCode, AccessCodeError, CodeNamespace};

/// Issues access codes that are unique within a namespace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessCodeCommand: Send + Sync {
    /// Whether `code` is free in `namespace`, ignoring the record `exclude_id`.
    ///
    /// Inconclusive checks report `false`.
    async fn is_unique(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> bool;

    /// Generate a code that is free in `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessCodeError::Exhausted`] when every attempt collided.
    async fn generate_unique(
        &self,
        namespace: CodeNamespace,
        exclude_id: Option<Uuid>,
    ) -> Result<AccessCode, AccessCodeError>;
}
