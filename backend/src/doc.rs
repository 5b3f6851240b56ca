//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the HTTP endpoints of the inbound layer, the schema
//! wrappers for domain errors, and the session cookie security scheme. Swagger
//! UI serves it in debug builds.

use crate::inbound::http::access_codes::{
    AccessCodeResponse, AvailabilityResponse, GenerateAccessCodeRequest,
};
use crate::inbound::http::permissions::PermissionResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie carrying member_id and admin_level.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Roster access API",
        description = "Category permissions and access code issuance for savings groups."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::permissions::get_category_permissions,
        crate::inbound::http::access_codes::generate_access_code,
        crate::inbound::http::access_codes::check_access_code_availability,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PermissionResponse,
        GenerateAccessCodeRequest,
        AccessCodeResponse,
        AvailabilityResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "permissions", description = "Access decisions for financial categories"),
        (name = "access-codes", description = "Member and group access codes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
