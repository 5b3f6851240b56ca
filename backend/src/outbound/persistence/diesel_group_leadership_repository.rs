//! PostgreSQL-backed `GroupLeadershipRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{GroupLeadershipRepository, GroupRepositoryError};
use crate::domain::{GroupId, GroupLeadership};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::GroupLeadershipRow;
use super::pool::{DbPool, PoolError};
use super::schema::groups;

/// Diesel-backed implementation of the `GroupLeadershipRepository` port.
#[derive(Clone)]
pub struct DieselGroupLeadershipRepository {
    pool: DbPool,
}

impl DieselGroupLeadershipRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> GroupRepositoryError {
    map_basic_pool_error(error, |message| GroupRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> GroupRepositoryError {
    map_basic_diesel_error(
        error,
        |message| GroupRepositoryError::query(message),
        |message| GroupRepositoryError::connection(message),
    )
}

#[async_trait]
impl GroupLeadershipRepository for DieselGroupLeadershipRepository {
    async fn find_leadership(
        &self,
        group_id: &GroupId,
    ) -> Result<Option<GroupLeadership>, GroupRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<GroupLeadershipRow> = groups::table
            .filter(groups::id.eq(group_id.as_uuid()))
            .select(GroupLeadershipRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(GroupLeadership::from))
    }
}
