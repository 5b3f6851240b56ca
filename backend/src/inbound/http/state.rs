//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccessCodeCommand, CategoryPermissionQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub permissions: Arc<dyn CategoryPermissionQuery>,
    pub access_codes: Arc<dyn AccessCodeCommand>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    pub fn new(
        permissions: Arc<dyn CategoryPermissionQuery>,
        access_codes: Arc<dyn AccessCodeCommand>,
    ) -> Self {
        Self {
            permissions,
            access_codes,
        }
    }
}
