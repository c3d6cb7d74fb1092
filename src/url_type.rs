//! Classification of raw reference strings.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    AUTHORITY_PREFIX, HASH_DELIMITER, PATH_SEPARATOR, QUERY_DELIMITER, SCHEME_DELIMITER,
};
use crate::error::UrlTypeError;

/// The kind of a URL-like string, ranked from weakest to strongest.
///
/// A stronger kind carries more self-sufficient context: resolving it
/// against a base never needs to borrow that context from the base.
///
/// ```text
/// Empty < Hash < Query < RelativePath < AbsolutePath < SchemeRelative < Absolute
/// ```
///
/// # Examples
///
/// ```
/// use resolve_uri::UrlType;
///
/// assert_eq!(UrlType::classify("https://foo.com/x"), UrlType::Absolute);
/// assert_eq!(UrlType::classify("//foo.com/x"), UrlType::SchemeRelative);
/// assert_eq!(UrlType::classify("../x"), UrlType::RelativePath);
/// assert!(UrlType::Hash < UrlType::Query);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum UrlType {
    /// The empty string.
    Empty,
    /// `#hash`
    Hash,
    /// `?query[#hash]`
    Query,
    /// `path[?query][#hash]` with no leading slash.
    RelativePath,
    /// `/path[?query][#hash]`
    AbsolutePath,
    /// `//host/path[?query][#hash]`
    SchemeRelative,
    /// `scheme:...`
    Absolute,
}

impl UrlType {
    /// Every kind, in rank order.
    pub const ALL: [Self; 7] = [
        Self::Empty,
        Self::Hash,
        Self::Query,
        Self::RelativePath,
        Self::AbsolutePath,
        Self::SchemeRelative,
        Self::Absolute,
    ];

    /// Classifies a string by inspecting its prefix.
    ///
    /// Never fails: every string has exactly one kind.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        if input.is_empty() {
            Self::Empty
        } else if input.starts_with(HASH_DELIMITER) {
            Self::Hash
        } else if input.starts_with(QUERY_DELIMITER) {
            Self::Query
        } else if input.starts_with(AUTHORITY_PREFIX) {
            Self::SchemeRelative
        } else if input.starts_with(PATH_SEPARATOR) {
            Self::AbsolutePath
        } else if scheme_end(input).is_some() {
            Self::Absolute
        } else {
            Self::RelativePath
        }
    }

    /// Returns the numeric rank (0 for `Empty`, 6 for `Absolute`).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns true if this kind carries a root that `..` cannot escape.
    ///
    /// `Absolute` is conditionally rooted (see the normalizer); this reports
    /// the kinds that are rooted regardless of content.
    #[must_use]
    pub const fn is_always_rooted(self) -> bool {
        matches!(self, Self::AbsolutePath | Self::SchemeRelative)
    }

    /// Returns true if this kind never carries a root.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        (self as u8) <= (Self::RelativePath as u8)
    }

    /// Returns true if a base of this kind can supply directory context.
    #[must_use]
    pub const fn has_path_context(self) -> bool {
        (self as u8) >= (Self::RelativePath as u8)
    }

    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Hash => "hash",
            Self::Query => "query",
            Self::RelativePath => "relative-path",
            Self::AbsolutePath => "absolute-path",
            Self::SchemeRelative => "scheme-relative",
            Self::Absolute => "absolute",
        }
    }
}

/// Returns the byte index of the scheme's `:` if one occurs before the first
/// `/`, `?`, or `#`.
pub(crate) fn scheme_end(input: &str) -> Option<usize> {
    let idx = input.find([SCHEME_DELIMITER, PATH_SEPARATOR, QUERY_DELIMITER, HASH_DELIMITER])?;
    input[idx..].starts_with(SCHEME_DELIMITER).then_some(idx)
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlType {
    type Err = UrlTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UrlTypeError::UnknownName {
                name: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
