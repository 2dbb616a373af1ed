//! Strongly-typed value objects used by inventory records and listings.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-zero
//! page sizes, trimmed names) so that once a value reaches the table layer it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(RowId, "Identifier of one listing entry (card or sealed product).");

/// Number of rows shown on one page of a listing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Rejects a zero page size.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(TypeConstraintError::ZeroPageSize)
    }

    /// Returns the page size as a plain `usize`.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Smaller size used for narrow viewports when none is configured.
    pub fn halved(self) -> Self {
        Self(NonZeroUsize::new(self.get() / 2).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// Item name wrapper enforcing trimmed, non-empty values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ItemName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ItemName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

/// Normalized filter term: trimmed and lower-cased.
///
/// An empty term matches every row.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw filter input. Never fails.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring test against an already lower-cased search blob.
    pub fn matches(&self, blob: &str) -> bool {
        self.0.is_empty() || blob.contains(self.0.as_str())
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_rejects_non_positive() {
        assert_eq!(RowId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(RowId::new(-4), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(RowId::new(7).map(RowId::get), Ok(7));
    }

    #[test]
    fn page_size_rejects_zero_and_halves_to_at_least_one() {
        assert_eq!(PageSize::new(0), Err(TypeConstraintError::ZeroPageSize));
        assert_eq!(PageSize::new(25).unwrap().halved().get(), 12);
        assert_eq!(PageSize::new(1).unwrap().halved().get(), 1);
    }

    #[test]
    fn item_name_is_trimmed() {
        assert_eq!(ItemName::new("  Brainstorm ").unwrap().as_str(), "Brainstorm");
        assert_eq!(ItemName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn search_term_normalizes_and_matches_substrings() {
        let term = SearchTerm::new("  DELVER ");
        assert_eq!(term.as_str(), "delver");
        assert!(term.matches("delver of secrets mid"));
        assert!(!term.matches("brainstorm ice"));
        assert!(SearchTerm::new("   ").matches("anything"));
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: RowId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
        assert!(serde_json::from_str::<RowId>("0").is_err());
    }
}
