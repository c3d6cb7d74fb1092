//! Dot-segment removal for rooted and floating paths.

use crate::constants::{CURRENT_DIR, PARENT_DIR, PATH_SEPARATOR};
use crate::record::UrlRecord;
use crate::url_type::UrlType;

/// How `..` segments that run out of directories are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathPolicy {
    /// The path hangs off a root (a leading `/` or an authority).
    /// Unresolvable `..` segments are clamped at the root.
    Rooted,
    /// The path has no root. Unresolvable `..` segments are kept.
    Floating,
}

impl PathPolicy {
    /// Picks the policy for a record printed as `kind`.
    ///
    /// Kinds up to `RelativePath` float. `AbsolutePath` and `SchemeRelative`
    /// are rooted. `Absolute` is rooted when it has an authority or its path
    /// starts with `/`; an opaque `data:abc` path floats.
    #[must_use]
    pub fn for_record(record: &UrlRecord, kind: UrlType) -> Self {
        if kind.is_floating() {
            Self::Floating
        } else if kind.is_always_rooted()
            || record.authority().is_some()
            || record.path().starts_with(PATH_SEPARATOR)
        {
            Self::Rooted
        } else {
            Self::Floating
        }
    }
}

/// Collapses `.` and `..` segments and drops empty segments.
///
/// A rooted result always starts with `/` (an empty rooted path becomes `/`);
/// a floating result never does. The result ends with `/` when the input did,
/// or when its last segment was a `..` that removed a directory, unless the
/// result ends in a literal `..`.
///
/// # Examples
///
/// ```
/// use resolve_uri::{PathPolicy, normalize_path};
///
/// assert_eq!(normalize_path("/../../../main.js.map", PathPolicy::Rooted), "/main.js.map");
/// assert_eq!(normalize_path("foo/../../../bar/x", PathPolicy::Floating), "../../bar/x");
/// assert_eq!(normalize_path("a/b/..", PathPolicy::Floating), "a/");
/// ```
#[must_use]
pub fn normalize_path(path: &str, policy: PathPolicy) -> String {
    let rooted = policy == PathPolicy::Rooted;
    let mut stack: Vec<&str> = Vec::new();
    let mut directories = 0usize;
    let mut trailing_slash = false;

    for segment in path.split(PATH_SEPARATOR) {
        if segment.is_empty() {
            trailing_slash = true;
            continue;
        }
        trailing_slash = false;

        if segment == CURRENT_DIR {
            continue;
        }

        if segment == PARENT_DIR {
            if directories > 0 {
                stack.pop();
                directories -= 1;
                trailing_slash = true;
            } else if !rooted {
                stack.push(PARENT_DIR);
            }
            continue;
        }

        stack.push(segment);
        directories += 1;
    }

    let joined = stack.join("/");
    let mut normalized = String::with_capacity(joined.len() + 2);
    if rooted {
        normalized.push(PATH_SEPARATOR);
    }
    normalized.push_str(&joined);
    if trailing_slash && !joined.is_empty() && stack.last() != Some(&PARENT_DIR) {
        normalized.push(PATH_SEPARATOR);
    }
    normalized
}

/// Returns the record with its path normalized under the policy for `kind`.
pub(crate) fn normalize(record: UrlRecord, kind: UrlType) -> UrlRecord {
    let policy = PathPolicy::for_record(&record, kind);
    let path = normalize_path(record.path(), policy);
    record.with_path(path)
}
