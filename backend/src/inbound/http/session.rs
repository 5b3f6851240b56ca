//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The session cookie carries the caller's identity as two optional keys:
//! `member_id` (UUID string) and `admin_level` (`super_admin`,
//! `admin_principal` or `admin_secundario`). Values that fail to parse are
//! ignored.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AdminLevel, DomainError, Identity, MemberId};

pub(crate) const MEMBER_ID_KEY: &str = "member_id";
pub(crate) const ADMIN_LEVEL_KEY: &str = "admin_level";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist an identity in the session cookie, replacing any previous one.
    pub fn persist_identity(&self, identity: &Identity) -> Result<(), DomainError> {
        let (level, member_id) = match identity {
            Identity::Admin { level, member_id } => (Some(*level), *member_id),
            Identity::Member { id } => (None, Some(*id)),
        };

        match level {
            Some(level) => self.insert(ADMIN_LEVEL_KEY, level.as_str())?,
            None => {
                self.0.remove(ADMIN_LEVEL_KEY);
            }
        }
        match member_id {
            Some(id) => self.insert(MEMBER_ID_KEY, &id.to_string())?,
            None => {
                self.0.remove(MEMBER_ID_KEY);
            }
        }
        Ok(())
    }

    /// Fetch the caller's identity from the session, if present.
    pub fn identity(&self) -> Result<Option<Identity>, DomainError> {
        let member_id = self
            .read(MEMBER_ID_KEY)?
            .and_then(|raw| match MemberId::new(&raw) {
                Ok(id) => Some(id),
                Err(error) => {
                    warn!(%error, "invalid member id in session cookie");
                    None
                }
            });
        let level = self
            .read(ADMIN_LEVEL_KEY)?
            .and_then(|raw| match raw.parse::<AdminLevel>() {
                Ok(level) => Some(level),
                Err(error) => {
                    warn!(%error, "invalid admin level in session cookie");
                    None
                }
            });

        Ok(match (level, member_id) {
            (Some(level), member_id) => Some(Identity::Admin { level, member_id }),
            (None, Some(id)) => Some(Identity::Member { id }),
            (None, None) => None,
        })
    }

    /// Require an identity or return `401 Unauthorized`.
    pub fn require_identity(&self) -> Result<Identity, DomainError> {
        self.identity()?
            .ok_or_else(|| DomainError::unauthorized("login required"))
    }

    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.0
            .get::<String>(key)
            .map_err(|error| DomainError::internal(format!("failed to read session: {error}")))
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.0
            .insert(key, value)
            .map_err(|error| DomainError::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
