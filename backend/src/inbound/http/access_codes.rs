//! Access code HTTP handlers.
//!
//! ```text
//! POST /api/v1/access-codes
//! GET  /api/v1/access-codes/{code}/availability?namespace=&excludeId=
//! ```
//!
//! Issued codes are not reserved: the caller stores them on the member or
//! group record, where the unique constraint has the final word.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::DomainError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_access_code, parse_namespace, parse_optional_uuid};

/// Request payload for issuing a code.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAccessCodeRequest {
    /// `member` or `group`.
    #[schema(example = "group")]
    pub namespace: Option<String>,
    /// Record whose current code should not count as a collision.
    pub exclude_id: Option<String>,
}

/// A freshly issued code.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessCodeResponse {
    #[schema(example = "K7-Q2X")]
    pub code: String,
    #[schema(example = "group")]
    pub namespace: String,
}

/// Query parameters of the availability probe.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// `member` or `group`.
    pub namespace: Option<String>,
    /// Record whose current code should not count as taken.
    pub exclude_id: Option<String>,
}

/// Result of an availability probe.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// The probed code in canonical form.
    #[schema(example = "AB-12C")]
    pub code: String,
    #[schema(example = "member")]
    pub namespace: String,
    /// False when the code is taken or the store could not confirm it is free.
    pub available: bool,
}

/// Issue a code that is currently free in the requested namespace.
#[utoipa::path(
    post,
    path = "/api/v1/access-codes",
    request_body = GenerateAccessCodeRequest,
    responses(
        (status = 201, description = "Code issued", body = AccessCodeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "No free code found", body = ErrorSchema)
    ),
    tags = ["access-codes"],
    operation_id = "generateAccessCode"
)]
#[post("/access-codes")]
pub async fn generate_access_code(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<GenerateAccessCodeRequest>,
) -> ApiResult<HttpResponse> {
    session.require_identity()?;
    let payload = payload.into_inner();
    let namespace = parse_namespace(payload.namespace.as_deref(), "namespace")?;
    let exclude_id = parse_optional_uuid(payload.exclude_id.as_deref(), "excludeId")?;

    let code = state
        .access_codes
        .generate_unique(namespace, exclude_id)
        .await
        .map_err(DomainError::from)?;

    Ok(HttpResponse::Created().json(AccessCodeResponse {
        code: code.into(),
        namespace: namespace.as_str().to_owned(),
    }))
}

/// Check whether a code is free in a namespace.
#[utoipa::path(
    get,
    path = "/api/v1/access-codes/{code}/availability",
    params(
        ("code" = String, Path, description = "Code to probe; case and surrounding whitespace are ignored"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Availability", body = AvailabilityResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["access-codes"],
    operation_id = "checkAccessCodeAvailability"
)]
#[get("/access-codes/{code}/availability")]
pub async fn check_access_code_availability(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<AvailabilityQuery>,
) -> ApiResult<web::Json<AvailabilityResponse>> {
    session.require_identity()?;
    let code = parse_access_code(&path.into_inner(), "code")?;
    let query = query.into_inner();
    let namespace = parse_namespace(query.namespace.as_deref(), "namespace")?;
    let exclude_id = parse_optional_uuid(query.exclude_id.as_deref(), "excludeId")?;

    let available = state
        .access_codes
        .is_unique(namespace, code.as_str(), exclude_id)
        .await;

    Ok(web::Json(AvailabilityResponse {
        code: code.into(),
        namespace: namespace.as_str().to_owned(),
        available,
    }))
}

#[cfg(test)]
#[path = "access_codes_tests.rs"]
mod tests;
