//! Builders wiring domain services onto Diesel adapters or fixtures.

use std::sync::Arc;

use actix_web::web;

use roster::domain::ports::{
    AccessCodeCommand, CategoryPermissionQuery, FixtureAccessCodeRegistry,
    FixtureCategoryRoleRepository, FixtureFinancialCategoryRepository,
    FixtureGroupLeadershipRepository,
};
use roster::domain::{AccessCodeService, CategoryPermissionService};
use roster::inbound::http::state::HttpState;
use roster::outbound::persistence::{
    DbPool, DieselAccessCodeRegistry, DieselCategoryRoleRepository,
    DieselFinancialCategoryRepository, DieselGroupLeadershipRepository,
};

use super::ServerConfig;

fn diesel_ports(
    pool: &DbPool,
) -> (
    Arc<dyn CategoryPermissionQuery>,
    Arc<dyn AccessCodeCommand>,
) {
    let permissions = CategoryPermissionService::new(
        Arc::new(DieselGroupLeadershipRepository::new(pool.clone())),
        Arc::new(DieselCategoryRoleRepository::new(pool.clone())),
        Arc::new(DieselFinancialCategoryRepository::new(pool.clone())),
    );
    let access_codes = AccessCodeService::new(Arc::new(DieselAccessCodeRegistry::new(pool.clone())));
    (Arc::new(permissions), Arc::new(access_codes))
}

fn fixture_ports() -> (
    Arc<dyn CategoryPermissionQuery>,
    Arc<dyn AccessCodeCommand>,
) {
    let permissions = CategoryPermissionService::new(
        Arc::new(FixtureGroupLeadershipRepository),
        Arc::new(FixtureCategoryRoleRepository),
        Arc::new(FixtureFinancialCategoryRepository),
    );
    let access_codes = AccessCodeService::new(Arc::new(FixtureAccessCodeRegistry));
    (Arc::new(permissions), Arc::new(access_codes))
}

/// Build handler state, using Diesel adapters when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (permissions, access_codes) = match &config.db_pool {
        Some(pool) => diesel_ports(pool),
        None => {
            tracing::warn!("no database configured; serving fixture data");
            fixture_ports()
        }
    };
    web::Data::new(HttpState::new(permissions, access_codes))
}
