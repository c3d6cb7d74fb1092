//! Rendering records back into strings.

use crate::constants::{
    AUTHORITY_PREFIX, CURRENT_DIR, CURRENT_DIR_PREFIX, HASH_DELIMITER, PARENT_DIR,
    PATH_SEPARATOR, QUERY_DELIMITER, SCHEME_DELIMITER,
};
use crate::record::UrlRecord;
use crate::url_type::UrlType;

/// Prints `record` as a reference of kind `kind`.
///
/// Only the components meaningful for `kind` are written. `explicit_dot`
/// requests a leading `./` on relative paths that do not already climb out
/// with `..`.
pub(crate) fn print(record: &UrlRecord, kind: UrlType, explicit_dot: bool) -> String {
    match kind {
        UrlType::Empty | UrlType::Hash | UrlType::Query => suffix(record),
        UrlType::RelativePath => print_relative(record, explicit_dot),
        UrlType::AbsolutePath => {
            let mut out = record.path().to_string();
            out.push_str(&suffix(record));
            out
        }
        UrlType::SchemeRelative | UrlType::Absolute => {
            let mut out = String::new();
            if let Some(scheme) = record.scheme() {
                out.push_str(scheme);
                out.push(SCHEME_DELIMITER);
            }
            if let Some(authority) = record.authority() {
                out.push_str(AUTHORITY_PREFIX);
                out.push_str(&authority.to_string());
            }
            out.push_str(record.path());
            out.push_str(&suffix(record));
            out
        }
    }
}

fn print_relative(record: &UrlRecord, explicit_dot: bool) -> String {
    let path = record.path();
    let suffix = suffix(record);

    if path.is_empty() {
        return if suffix.is_empty() {
            CURRENT_DIR.to_string()
        } else {
            suffix
        };
    }

    let first = path.split(PATH_SEPARATOR).next().unwrap_or_default();
    let needs_dot = first.contains(SCHEME_DELIMITER)
        || (explicit_dot && first != PARENT_DIR && first != CURRENT_DIR);

    let mut out = String::with_capacity(path.len() + suffix.len() + 2);
    if needs_dot {
        out.push_str(CURRENT_DIR_PREFIX);
    }
    out.push_str(path);
    out.push_str(&suffix);
    out
}

/// `?query#hash`, with only the parts that are present.
fn suffix(record: &UrlRecord) -> String {
    let mut out = String::new();
    if let Some(query) = record.query() {
        out.push(QUERY_DELIMITER);
        out.push_str(query);
    }
    if let Some(hash) = record.hash() {
        out.push(HASH_DELIMITER);
        out.push_str(hash);
    }
    out
}
