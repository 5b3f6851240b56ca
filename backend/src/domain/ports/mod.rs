//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, `AccessCodeRegistry`) are implemented by
//! outbound adapters; driving ports (`CategoryPermissionQuery`,
//! `AccessCodeCommand`) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod access_code_command;
mod access_code_registry;
mod category_permission_query;
mod category_role_repository;
mod financial_category_repository;
mod group_leadership_repository;

pub use access_code_command::AccessCodeCommand;
#[cfg(test)]
pub use access_code_command::MockAccessCodeCommand;
#[cfg(test)]
pub use access_code_registry::MockAccessCodeRegistry;
pub use access_code_registry::{
    AccessCodeRegistry, AccessCodeRegistryError, FixtureAccessCodeRegistry,
};
#[cfg(test)]
pub use category_permission_query::MockCategoryPermissionQuery;
pub use category_permission_query::{CategoryPermissionQuery, PermissionRequest};
#[cfg(test)]
pub use category_role_repository::MockCategoryRoleRepository;
pub use category_role_repository::{
    CategoryRoleRepository, CategoryRoleRepositoryError, FixtureCategoryRoleRepository,
};
#[cfg(test)]
pub use financial_category_repository::MockFinancialCategoryRepository;
pub use financial_category_repository::{
    FinancialCategoryRepository, FinancialCategoryRepositoryError,
    FixtureFinancialCategoryRepository,
};
#[cfg(test)]
pub use group_leadership_repository::MockGroupLeadershipRepository;
pub use group_leadership_repository::{
    FixtureGroupLeadershipRepository, GroupLeadershipRepository, GroupRepositoryError,
};
