//! Error types.
//!
//! Resolution itself never fails; the only fallible conversion is parsing a
//! [`UrlType`](crate::UrlType) from its name.

use std::fmt;

/// Errors that can occur when parsing a [`UrlType`](crate::UrlType) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTypeError {
    /// The name does not match any kind.
    UnknownName {
        /// The name that was given
        name: String,
    },
}

impl fmt::Display for UrlTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName { name } => write!(
                f,
                "unknown URL type '{name}'; expected one of empty, hash, query, relative-path, absolute-path, scheme-relative, absolute"
            ),
        }
    }
}

impl std::error::Error for UrlTypeError {}
