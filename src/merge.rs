//! Filling a reference's missing components from a base.

use crate::constants::{PARENT_DIR, PATH_SEPARATOR};
use crate::normalize::{PathPolicy, normalize_path};
use crate::record::UrlRecord;
use crate::url_type::UrlType;

type Inherit = fn(UrlRecord, &UrlRecord) -> UrlRecord;

/// What a reference borrows from its base, by the strongest reference kind
/// that still borrows it. Every row whose threshold is at or above the
/// reference's kind applies, in order.
const INHERITANCE: [(UrlType, Inherit); 5] = [
    (UrlType::Empty, inherit_hash),
    (UrlType::Hash, inherit_query),
    (UrlType::RelativePath, merge_paths),
    (UrlType::AbsolutePath, inherit_authority),
    (UrlType::SchemeRelative, inherit_scheme),
];

/// Merges `input` with `base`, returning the merged record and its
/// effective kind (the stronger of the two).
///
/// The base is only read. An `Absolute` input ignores the base entirely.
pub(crate) fn merge(input: UrlRecord, base: &UrlRecord) -> (UrlRecord, UrlType) {
    let kind = input.kind();
    if kind == UrlType::Absolute {
        return (input, kind);
    }

    let merged = INHERITANCE
        .iter()
        .filter(|(threshold, _)| kind <= *threshold)
        .fold(input, |record, (_, inherit)| inherit(record, base));

    (merged, kind.max(base.kind()))
}

fn inherit_hash(record: UrlRecord, base: &UrlRecord) -> UrlRecord {
    record.with_hash(base.hash().map(str::to_string))
}

fn inherit_query(record: UrlRecord, base: &UrlRecord) -> UrlRecord {
    record.with_query(base.query().map(str::to_string))
}

fn inherit_authority(record: UrlRecord, base: &UrlRecord) -> UrlRecord {
    record.with_authority(base.authority().cloned())
}

fn inherit_scheme(record: UrlRecord, base: &UrlRecord) -> UrlRecord {
    record.with_scheme(base.scheme().map(str::to_string))
}

/// An empty reference path takes the base path as is; anything else is
/// appended to the base's directory.
fn merge_paths(record: UrlRecord, base: &UrlRecord) -> UrlRecord {
    let base_path = normalize_path(base.path(), PathPolicy::for_record(base, base.kind()));
    let path = if record.path().is_empty() {
        base_path
    } else {
        let mut path = directory_of(&base_path);
        path.push_str(record.path());
        path
    };
    record.with_path(path)
}

/// Returns the directory part of a normalized path, ending in `/` unless
/// empty. The final segment is the file name and is dropped, except for a
/// literal `..`, which names a directory.
pub(crate) fn directory_of(path: &str) -> String {
    let (directory, file) = match path.rfind(PATH_SEPARATOR) {
        Some(idx) => (&path[..=idx], &path[idx + 1..]),
        None => ("", path),
    };

    if file == PARENT_DIR {
        format!("{path}{PATH_SEPARATOR}")
    } else {
        directory.to_string()
    }
}
