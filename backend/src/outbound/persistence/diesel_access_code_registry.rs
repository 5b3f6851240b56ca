//! PostgreSQL-backed `AccessCodeRegistry` implementation.
//!
//! Member codes live in `members.member_code`, group codes in
//! `groups.access_code`. Both columns carry unique constraints, so a probe
//! that races with a concurrent insert is still caught on write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::CodeNamespace;
use crate::domain::ports::{AccessCodeRegistry, AccessCodeRegistryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::{groups, members};

/// Diesel-backed implementation of the `AccessCodeRegistry` port.
#[derive(Clone)]
pub struct DieselAccessCodeRegistry {
    pool: DbPool,
}

impl DieselAccessCodeRegistry {
    /// Create a new registry with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccessCodeRegistryError {
    map_basic_pool_error(error, |message| AccessCodeRegistryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> AccessCodeRegistryError {
    map_basic_diesel_error(
        error,
        |message| AccessCodeRegistryError::query(message),
        |message| AccessCodeRegistryError::connection(message),
    )
}

#[async_trait]
impl AccessCodeRegistry for DieselAccessCodeRegistry {
    async fn code_exists(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AccessCodeRegistryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let holder: Option<Uuid> = match namespace {
            CodeNamespace::Member => {
                let mut query = members::table
                    .filter(members::member_code.eq(code))
                    .select(members::id)
                    .into_boxed();
                if let Some(exclude) = exclude_id {
                    query = query.filter(members::id.ne(exclude));
                }
                query.first::<Uuid>(&mut conn).await.optional()
            }
            CodeNamespace::Group => {
                let mut query = groups::table
                    .filter(groups::access_code.eq(code))
                    .select(groups::id)
                    .into_boxed();
                if let Some(exclude) = exclude_id {
                    query = query.filter(groups::id.ne(exclude));
                }
                query.first::<Uuid>(&mut conn).await.optional()
            }
        }
        .map_err(map_diesel_error)?;

        Ok(holder.is_some())
    }
}
