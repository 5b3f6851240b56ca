//! PostgreSQL-backed `CategoryRoleRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CategoryRoleRepository, CategoryRoleRepositoryError};
use crate::domain::{CategoryId, CategoryRole, MemberId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::category_roles;

/// Diesel-backed implementation of the `CategoryRoleRepository` port.
///
/// Reads only rows with `is_active = true`.
#[derive(Clone)]
pub struct DieselCategoryRoleRepository {
    pool: DbPool,
}

impl DieselCategoryRoleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRoleRepositoryError {
    map_basic_pool_error(error, |message| {
        CategoryRoleRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> CategoryRoleRepositoryError {
    map_basic_diesel_error(
        error,
        |message| CategoryRoleRepositoryError::query(message),
        |message| CategoryRoleRepositoryError::connection(message),
    )
}

fn parse_role(value: String) -> Result<CategoryRole, CategoryRoleRepositoryError> {
    value.parse().map_err(|_| {
        warn!(value = %value, "unrecognised category role in store");
        CategoryRoleRepositoryError::unknown_role(value)
    })
}

#[async_trait]
impl CategoryRoleRepository for DieselCategoryRoleRepository {
    async fn find_active_role(
        &self,
        category_id: &CategoryId,
        member_id: &MemberId,
    ) -> Result<Option<CategoryRole>, CategoryRoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let role: Option<String> = category_roles::table
            .filter(category_roles::category_id.eq(category_id.as_uuid()))
            .filter(category_roles::member_id.eq(member_id.as_uuid()))
            .filter(category_roles::is_active.eq(true))
            .select(category_roles::role)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        role.map(parse_role).transpose()
    }
}
