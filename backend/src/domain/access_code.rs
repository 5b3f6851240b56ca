//! Short human-readable access codes for members and groups.
//!
//! A code is 5 to 7 characters long: uppercase letters and digits plus
//! exactly one separator (`-` or `@`) at a random position, for example
//! `K7-Q2` or `9@ZX4AB`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Characters drawn for the alphanumeric positions.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Separator symbols; every code holds exactly one.
pub const CODE_SEPARATORS: [char; 2] = ['-', '@'];
/// Shortest generated code, separator included.
pub const CODE_LENGTH_MIN: usize = 5;
/// Longest generated code, separator included.
pub const CODE_LENGTH_MAX: usize = 7;

/// Validation errors returned by [`AccessCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessCodeValidationError {
    #[error("access code must not be empty")]
    Empty,
    #[error("access code must be {min} to {max} characters, found {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("access code must contain exactly one '-' or '@', found {found}")]
    SeparatorCount { found: usize },
    #[error("access code contains an invalid character: {character:?}")]
    InvalidCharacter { character: char },
}

/// Errors raised while issuing access codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessCodeError {
    /// Every generated candidate collided with a stored code.
    #[error("no unique {namespace} code found after {attempts} attempts")]
    Exhausted {
        namespace: CodeNamespace,
        attempts: usize,
    },
}

/// Returned when a namespace name is neither `member` nor `group`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown access code namespace: {value}")]
pub struct UnknownCodeNamespace {
    pub value: String,
}

/// Registry a code belongs to.
///
/// Member codes and group access codes are independent namespaces: the same
/// string may exist once in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeNamespace {
    /// `members.member_code`.
    Member,
    /// `groups.access_code`.
    Group,
}

impl CodeNamespace {
    /// Name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for CodeNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeNamespace {
    type Err = UnknownCodeNamespace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "group" => Ok(Self::Group),
            other => Err(UnknownCodeNamespace {
                value: other.to_owned(),
            }),
        }
    }
}

/// Canonical form used for storage and comparison: trimmed and uppercased.
///
/// # Examples
/// ```
/// use roster::domain::normalize_code;
///
/// assert_eq!(normalize_code("  ab-12c "), "AB-12C");
/// ```
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A well-formed access code in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Draw a fresh code from the thread-local RNG.
    ///
    /// Codes are not unique across calls; see
    /// [`AccessCodeService::generate_unique`](crate::domain::AccessCodeService::generate_unique).
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draw a fresh code from `rng`.
    ///
    /// Length, separator and every alphanumeric position are drawn
    /// uniformly, then all positions are shuffled so the separator has no
    /// fixed place.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let length = rng.gen_range(CODE_LENGTH_MIN..=CODE_LENGTH_MAX);
        let separator = CODE_SEPARATORS[rng.gen_range(0..CODE_SEPARATORS.len())];

        let mut chars: Vec<char> = (1..length)
            .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
            .collect();
        chars.push(separator);
        chars.shuffle(rng);

        Self(chars.into_iter().collect())
    }

    /// Normalise and validate user-supplied input.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::AccessCode;
    ///
    /// let code = AccessCode::parse(" k7-q2 ").expect("valid code");
    /// assert_eq!(code.as_str(), "K7-Q2");
    /// assert!(AccessCode::parse("K7Q2X").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AccessCodeValidationError> {
        let code = normalize_code(raw);
        if code.is_empty() {
            return Err(AccessCodeValidationError::Empty);
        }

        let length = code.chars().count();
        if !(CODE_LENGTH_MIN..=CODE_LENGTH_MAX).contains(&length) {
            return Err(AccessCodeValidationError::Length {
                min: CODE_LENGTH_MIN,
                max: CODE_LENGTH_MAX,
                actual: length,
            });
        }

        if let Some(character) = code
            .chars()
            .find(|c| !CODE_SEPARATORS.contains(c) && !c.is_ascii_uppercase() && !c.is_ascii_digit())
        {
            return Err(AccessCodeValidationError::InvalidCharacter { character });
        }

        let found = code.chars().filter(|c| CODE_SEPARATORS.contains(c)).count();
        if found != 1 {
            return Err(AccessCodeValidationError::SeparatorCount { found });
        }

        Ok(Self(code))
    }

    /// Borrow the code text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AccessCode> for String {
    fn from(value: AccessCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for AccessCode {
    type Error = AccessCodeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
