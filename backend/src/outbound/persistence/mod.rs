//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven ports, backed by PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories translate rows into domain types and
//!   nothing more. Access rules live in the domain services.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map onto each
//!   port's `Connection`/`Query` variants.
//!
//! # Example
//!
//! ```ignore
//! use roster::outbound::persistence::{DbPool, DieselGroupLeadershipRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let groups = DieselGroupLeadershipRepository::new(pool);
//! ```

mod diesel_access_code_registry;
mod diesel_basic_error_mapping;
mod diesel_category_role_repository;
mod diesel_financial_category_repository;
mod diesel_group_leadership_repository;
mod models;
mod pool;
mod schema;

pub use diesel_access_code_registry::DieselAccessCodeRegistry;
pub use diesel_category_role_repository::DieselCategoryRoleRepository;
pub use diesel_financial_category_repository::DieselFinancialCategoryRepository;
pub use diesel_group_leadership_repository::DieselGroupLeadershipRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
