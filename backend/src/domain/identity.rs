//! Record identifiers and caller identities.
//!
//! Identifiers wrap the UUID primary keys of the roster tables. Parsing
//! rejects blank input, surrounding whitespace and malformed UUIDs, so an
//! identifier that reaches a port always names a well-formed row key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while parsing record identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    /// The raw identifier was empty.
    #[error("{kind} id must not be empty")]
    Empty { kind: &'static str },
    /// The raw identifier was not a canonical UUID.
    #[error("{kind} id must be a valid UUID")]
    Invalid { kind: &'static str },
}

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Validate and construct an identifier from borrowed input.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                let raw = raw.as_ref();
                if raw.is_empty() {
                    return Err(IdentifierValidationError::Empty { kind: $kind });
                }
                if raw.trim() != raw {
                    return Err(IdentifierValidationError::Invalid { kind: $kind });
                }
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| IdentifierValidationError::Invalid { kind: $kind })
            }

            /// Wrap a UUID read from storage.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_record_id! {
    /// Primary key of a row in `groups`.
    GroupId => "group"
}

define_record_id! {
    /// Primary key of a row in `financial_categories`.
    CategoryId => "category"
}

define_record_id! {
    /// Primary key of a row in `members`.
    MemberId => "member"
}

/// Error returned when an admin level string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin level: {value}")]
pub struct UnknownAdminLevel {
    value: String,
}

/// Global privilege tier of an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    /// Platform owner.
    SuperAdmin,
    /// Primary administrator of the deployment.
    #[serde(rename = "admin_principal")]
    Principal,
    /// Delegated administrator with no implicit category rights.
    #[serde(rename = "admin_secundario")]
    Secondary,
}

impl AdminLevel {
    /// Storage and session representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Principal => "admin_principal",
            Self::Secondary => "admin_secundario",
        }
    }

    /// Whether this level skips every category-level check.
    pub fn bypasses_category_checks(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Principal)
    }
}

impl fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminLevel {
    type Err = UnknownAdminLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin_principal" => Ok(Self::Principal),
            "admin_secundario" => Ok(Self::Secondary),
            other => Err(UnknownAdminLevel {
                value: other.to_owned(),
            }),
        }
    }
}

/// Who is asking for access.
///
/// Administrators may also be bound to a member record; the binding is used
/// when their level does not bypass category checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Identity {
    /// Administrator with a global level.
    #[serde(rename_all = "camelCase")]
    Admin {
        level: AdminLevel,
        member_id: Option<MemberId>,
    },
    /// Regular group member.
    Member { id: MemberId },
}

impl Identity {
    /// Member record the identity acts as, if any.
    pub fn member_id(&self) -> Option<MemberId> {
        match self {
            Self::Admin { member_id, .. } => *member_id,
            Self::Member { id } => Some(*id),
        }
    }
}
