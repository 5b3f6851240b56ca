//! Category permission HTTP handler.
//!
//! ```text
//! GET /api/v1/groups/{groupId}/categories/{categoryId}/permissions
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::PermissionRequest;
use crate::domain::{CategoryId, GroupId, PermissionResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Access decision for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResponse {
    /// Always true for authenticated callers.
    pub can_view: bool,
    /// Whether balances and totals may be shown.
    pub can_view_balance: bool,
    /// Whether entries may be created or changed.
    pub can_edit: bool,
    /// Active category role, when one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "secretario")]
    pub role: Option<String>,
    /// Whether the caller holds a leadership slot in the group.
    pub is_group_leader: bool,
}

impl From<PermissionResult> for PermissionResponse {
    fn from(value: PermissionResult) -> Self {
        Self {
            can_view: value.can_view,
            can_view_balance: value.can_view_balance,
            can_edit: value.can_edit,
            role: value.role.map(|role| role.as_str().to_owned()),
            is_group_leader: value.is_group_leader,
        }
    }
}

/// Resolve what the session identity may do with a financial category.
///
/// Store failures never surface here: the resolver degrades to view-only.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{groupId}/categories/{categoryId}/permissions",
    params(
        ("groupId" = String, Path, description = "Group identifier (UUID)"),
        ("categoryId" = String, Path, description = "Financial category identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Access decision", body = PermissionResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["permissions"],
    operation_id = "getCategoryPermissions"
)]
#[get("/groups/{group_id}/categories/{category_id}/permissions")]
pub async fn get_category_permissions(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<PermissionResponse>> {
    let identity = session.require_identity()?;
    let (group_id, category_id) = path.into_inner();
    let group_id: GroupId = parse_id(&group_id, "groupId")?;
    let category_id: CategoryId = parse_id(&category_id, "categoryId")?;

    let result = state
        .permissions
        .resolve(&PermissionRequest {
            category_id: Some(category_id),
            group_id: Some(group_id),
            identity,
        })
        .await;

    Ok(web::Json(PermissionResponse::from(result)))
}

#[cfg(test)]
#[path = "permissions_tests.rs"]
mod tests;
