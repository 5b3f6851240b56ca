//! Port for reading the lock flag of financial categories.

use async_trait::async_trait;

use crate::domain::CategoryId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by financial category repository adapters.
    pub enum FinancialCategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "financial category repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "financial category repository query failed: {message}",
    }
}

/// Read access to `financial_categories.is_locked`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FinancialCategoryRepository: Send + Sync {
    /// Fetch whether the category is locked.
    ///
    /// Returns `None` when no category has this id.
    async fn find_lock_state(
        &self,
        category_id: &CategoryId,
    ) -> Result<Option<bool>, FinancialCategoryRepositoryError>;
}

/// Fixture implementation that knows no categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFinancialCategoryRepository;

#[async_trait]
impl FinancialCategoryRepository for FixtureFinancialCategoryRepository {
    async fn find_lock_state(
        &self,
        _category_id: &CategoryId,
    ) -> Result<Option<bool>, FinancialCategoryRepositoryError> {
        Ok(None)
    }
}
