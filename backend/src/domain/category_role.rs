//! Category-scoped responsibilities held by members.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a stored role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category role: {value}")]
pub struct UnknownCategoryRole {
    value: String,
}

/// Role a member holds within a single financial category.
///
/// The serialised names match the values stored in `category_roles.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryRole {
    #[serde(rename = "presidente")]
    President,
    #[serde(rename = "secretario")]
    Secretary,
    #[serde(rename = "asistente")]
    Assistant,
}

impl CategoryRole {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::President => "presidente",
            Self::Secretary => "secretario",
            Self::Assistant => "asistente",
        }
    }
}

impl fmt::Display for CategoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryRole {
    type Err = UnknownCategoryRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "presidente" => Ok(Self::President),
            "secretario" => Ok(Self::Secretary),
            "asistente" => Ok(Self::Assistant),
            other => Err(UnknownCategoryRole {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CategoryRole::President)]
    #[case(CategoryRole::Secretary)]
    #[case(CategoryRole::Assistant)]
    fn storage_names_parse_back(#[case] role: CategoryRole) {
        assert_eq!(role.as_str().parse::<CategoryRole>(), Ok(role));
    }

    #[rstest]
    fn serde_uses_storage_names() {
        let value = serde_json::to_value(CategoryRole::Secretary).expect("serialise role");
        assert_eq!(value, "secretario");
    }

    #[rstest]
    fn rejects_unknown_roles() {
        assert!("tesorero".parse::<CategoryRole>().is_err());
    }
}
