//! Internal Diesel row structs for database reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{GroupLeadership, MemberId};

use super::schema::groups;

/// Leadership slots read from the groups table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GroupLeadershipRow {
    pub president_id: Option<Uuid>,
    pub vice_president_1_id: Option<Uuid>,
    pub vice_president_2_id: Option<Uuid>,
}

impl From<GroupLeadershipRow> for GroupLeadership {
    fn from(row: GroupLeadershipRow) -> Self {
        Self {
            president: row.president_id.map(MemberId::from_uuid),
            vice_president_1: row.vice_president_1_id.map(MemberId::from_uuid),
            vice_president_2: row.vice_president_2_id.map(MemberId::from_uuid),
        }
    }
}
