//! PostgreSQL-backed `FinancialCategoryRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::CategoryId;
use crate::domain::ports::{FinancialCategoryRepository, FinancialCategoryRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::financial_categories;

/// Diesel-backed implementation of the `FinancialCategoryRepository` port.
#[derive(Clone)]
pub struct DieselFinancialCategoryRepository {
    pool: DbPool,
}

impl DieselFinancialCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FinancialCategoryRepositoryError {
    map_basic_pool_error(error, |message| {
        FinancialCategoryRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> FinancialCategoryRepositoryError {
    map_basic_diesel_error(
        error,
        |message| FinancialCategoryRepositoryError::query(message),
        |message| FinancialCategoryRepositoryError::connection(message),
    )
}

#[async_trait]
impl FinancialCategoryRepository for DieselFinancialCategoryRepository {
    async fn find_lock_state(
        &self,
        category_id: &CategoryId,
    ) -> Result<Option<bool>, FinancialCategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        financial_categories::table
            .filter(financial_categories::id.eq(category_id.as_uuid()))
            .select(financial_categories::is_locked)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }
}
