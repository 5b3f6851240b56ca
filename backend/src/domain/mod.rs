//! Domain primitives, services and ports.
//!
//! Purpose: hold the access rules of the roster application independently of
//! HTTP and storage. Services depend on ports only; adapters live in
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - `CategoryPermissionService` — resolves what a caller may do with a
//!   financial category.
//! - `AccessCodeService` — issues member and group access codes that are
//!   unique within their namespace.
//! - `DomainError` / `ErrorCode` — transport-agnostic failure payload.

pub mod access_code;
pub mod access_code_service;
pub mod category_role;
pub mod error;
pub mod group_leadership;
pub mod identity;
pub mod permission;
pub mod permission_service;
pub mod ports;
pub mod trace_id;

pub use self::access_code::{
    AccessCode, AccessCodeError, AccessCodeValidationError, CodeNamespace, UnknownCodeNamespace,
    normalize_code,
};
pub use self::access_code_service::{AccessCodeService, MAX_GENERATION_ATTEMPTS};
pub use self::category_role::{CategoryRole, UnknownCategoryRole};
pub use self::error::{DomainError, ErrorCode};
pub use self::group_leadership::GroupLeadership;
pub use self::identity::{
    AdminLevel, CategoryId, GroupId, IdentifierValidationError, Identity, MemberId,
    UnknownAdminLevel,
};
pub use self::permission::PermissionResult;
pub use self::permission_service::CategoryPermissionService;
pub use self::trace_id::TraceId;

