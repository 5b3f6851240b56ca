//! HTTP inbound adapter exposing REST endpoints.

pub mod access_codes;
pub mod error;
pub mod health;
pub mod permissions;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
