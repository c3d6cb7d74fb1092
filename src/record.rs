//! Parsed form of a URL-like string.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    AUTHORITY_PREFIX, FILE_SCHEME, HASH_DELIMITER, PATH_SEPARATOR, QUERY_DELIMITER,
    SCHEME_DELIMITER, USER_DELIMITER,
};
use crate::printer;
use crate::url_type::{UrlType, scheme_end};

/// The `user@host:port` part of a URL.
///
/// An authority is always present or absent as a whole; a record never
/// carries a host without its user and port slots.
///
/// # Examples
///
/// ```
/// use resolve_uri::Authority;
///
/// let auth = Authority::parse("me@foo.com:8080");
/// assert_eq!(auth.user(), Some("me"));
/// assert_eq!(auth.host(), "foo.com");
/// assert_eq!(auth.port(), Some("8080"));
///
/// let auth = Authority::parse("[::1]:3000");
/// assert_eq!(auth.host(), "[::1]");
/// assert_eq!(auth.port(), Some("3000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Authority {
    user: Option<String>,
    host: String,
    port: Option<String>,
}

impl Authority {
    /// Splits an authority string (without the leading `//`).
    ///
    /// The user ends at the last `@`. The port starts at the last `:` that
    /// is not inside a bracketed IPv6 literal.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let (user, host_port) = match input.rfind(USER_DELIMITER) {
            Some(at) => (Some(&input[..at]), &input[at + 1..]),
            None => (None, input),
        };

        let literal_end = host_port.rfind(']').map_or(0, |idx| idx + 1);
        let (host, port) = match host_port[literal_end..].rfind(SCHEME_DELIMITER) {
            Some(idx) => {
                let colon = literal_end + idx;
                (&host_port[..colon], Some(&host_port[colon + 1..]))
            }
            None => (host_port, None),
        };

        Self {
            user: user.map(str::to_string),
            host: host.to_string(),
            port: port.map(str::to_string),
        }
    }

    /// Returns the user, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the host (possibly empty, as in `file:///x`).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if present.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.user {
            write!(f, "{user}{USER_DELIMITER}")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = &self.port {
            write!(f, "{SCHEME_DELIMITER}{port}")?;
        }
        Ok(())
    }
}

/// A URL-like string split into its components.
///
/// Parsing is total and performs no normalization: the path is kept exactly
/// as written so that merging can operate on raw segments.
///
/// # Examples
///
/// ```
/// use resolve_uri::{UrlRecord, UrlType};
///
/// let record = UrlRecord::parse("https://user@foo.com:443/a/../b?q=1#top");
/// assert_eq!(record.kind(), UrlType::Absolute);
/// assert_eq!(record.scheme(), Some("https"));
/// assert_eq!(record.authority().map(|a| a.host()), Some("foo.com"));
/// assert_eq!(record.path(), "/a/../b");
/// assert_eq!(record.query(), Some("q=1"));
/// assert_eq!(record.hash(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlRecord {
    kind: UrlType,
    scheme: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl UrlRecord {
    /// Classifies and parses a string.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::parse_as(input, UrlType::classify(input))
    }

    /// A record with no components, used to build synthetic references.
    pub(crate) const fn empty() -> Self {
        Self {
            kind: UrlType::Empty,
            scheme: None,
            authority: None,
            path: String::new(),
            query: None,
            hash: None,
        }
    }

    fn parse_as(input: &str, kind: UrlType) -> Self {
        let (rest, hash) = split_suffix(input, HASH_DELIMITER);
        let (rest, query) = split_suffix(rest, QUERY_DELIMITER);

        let record = Self {
            kind,
            query: query.map(str::to_string),
            hash: hash.map(str::to_string),
            ..Self::empty()
        };

        match kind {
            UrlType::Empty | UrlType::Hash | UrlType::Query => record,
            UrlType::RelativePath | UrlType::AbsolutePath => record.with_path(rest.to_string()),
            UrlType::SchemeRelative => {
                let (authority, path) = split_authority(&rest[AUTHORITY_PREFIX.len()..]);
                record
                    .with_authority(Some(authority))
                    .with_path(path.to_string())
            }
            UrlType::Absolute => match scheme_end(rest) {
                Some(colon) => Self::parse_hierarchy(record, &rest[..colon], &rest[colon + 1..]),
                None => record.with_path(rest.to_string()),
            },
        }
    }

    fn parse_hierarchy(record: Self, scheme: &str, rest: &str) -> Self {
        let record = record.with_scheme(Some(scheme.to_string()));

        if scheme.eq_ignore_ascii_case(FILE_SCHEME) {
            let (authority, path) = match rest.strip_prefix(AUTHORITY_PREFIX) {
                Some(after) if !starts_with_drive_letter(after) => split_authority(after),
                Some(after) => (Authority::default(), after),
                None => (Authority::default(), rest),
            };
            let path = if path.starts_with(PATH_SEPARATOR) {
                path.to_string()
            } else {
                format!("{PATH_SEPARATOR}{path}")
            };
            return record.with_authority(Some(authority)).with_path(path);
        }

        match rest.strip_prefix(AUTHORITY_PREFIX) {
            Some(after) => {
                let (authority, path) = split_authority(after);
                record
                    .with_authority(Some(authority))
                    .with_path(path.to_string())
            }
            None => record.with_path(rest.to_string()),
        }
    }

    /// Returns the kind this record was parsed as.
    #[must_use]
    pub const fn kind(&self) -> UrlType {
        self.kind
    }

    /// Returns the scheme (without `:`), if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority, if present.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query (without `?`), if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the hash (without `#`), if present.
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Returns the record with the given scheme.
    #[must_use]
    pub fn with_scheme(self, scheme: Option<String>) -> Self {
        Self { scheme, ..self }
    }

    /// Returns the record with the given authority.
    #[must_use]
    pub fn with_authority(self, authority: Option<Authority>) -> Self {
        Self { authority, ..self }
    }

    /// Returns the record with the given path.
    #[must_use]
    pub fn with_path(self, path: String) -> Self {
        Self { path, ..self }
    }

    /// Returns the record with the given query.
    #[must_use]
    pub fn with_query(self, query: Option<String>) -> Self {
        Self { query, ..self }
    }

    /// Returns the record with the given hash.
    #[must_use]
    pub fn with_hash(self, hash: Option<String>) -> Self {
        Self { hash, ..self }
    }
}

/// Splits `input` at the first `delimiter`, returning the text before it and
/// the text after it (if the delimiter occurs).
fn split_suffix(input: &str, delimiter: char) -> (&str, Option<&str>) {
    match input.find(delimiter) {
        Some(idx) => (&input[..idx], Some(&input[idx + 1..])),
        None => (input, None),
    }
}

/// Splits `//`-stripped text into its authority and the path that follows.
fn split_authority(input: &str) -> (Authority, &str) {
    let end = input.find(PATH_SEPARATOR).unwrap_or(input.len());
    (Authority::parse(&input[..end]), &input[end..])
}

fn starts_with_drive_letter(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::print(self, self.kind, false))
    }
}

impl FromStr for UrlRecord {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UrlRecord {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
