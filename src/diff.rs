//! Computing the shortest reference from a base to a target.

use crate::constants::{CURRENT_DIR_PREFIX, PARENT_DIR, PATH_SEPARATOR};
use crate::normalize::PathPolicy;
use crate::record::UrlRecord;
use crate::url_type::UrlType;

/// Returns the reference that, resolved against `base`, yields `target`,
/// along with the kind to print it as.
///
/// Both records must already be normalized, and `target` must already be
/// resolved against `base` so that its kind is at least `base_kind`.
/// Components are compared from the strongest (scheme) down; the first
/// difference decides how much of `target` the reference has to spell out.
pub(crate) fn difference(
    base: &UrlRecord,
    base_kind: UrlType,
    target: UrlRecord,
    target_kind: UrlType,
) -> (UrlRecord, UrlType) {
    if base.scheme() != target.scheme() {
        return (target, target_kind);
    }

    if base.authority() != target.authority() {
        return if target.authority().is_some() {
            (target.with_scheme(None), UrlType::SchemeRelative)
        } else {
            (target, target_kind)
        };
    }

    let base_rooted = PathPolicy::for_record(base, base_kind) == PathPolicy::Rooted;
    let target_rooted = PathPolicy::for_record(&target, target_kind) == PathPolicy::Rooted;
    if base_rooted != target_rooted {
        return if target_rooted {
            (target, UrlType::AbsolutePath)
        } else {
            (target, target_kind)
        };
    }

    // A query or hash reference can replace those components but never
    // remove them, so dropping one needs a path reference.
    let drops_query = target.query().is_none() && base.query().is_some();
    let drops_hash = target.query() == base.query()
        && target.hash().is_none()
        && base.hash().is_some();

    if base.path() != target.path() || drops_query || drops_hash {
        return match relative_path(base.path(), target.path()) {
            Some(path) => (
                UrlRecord::empty()
                    .with_path(path)
                    .with_query(target.query().map(str::to_string))
                    .with_hash(target.hash().map(str::to_string)),
                UrlType::RelativePath,
            ),
            None => (target, target_kind),
        };
    }

    if base.query() != target.query() {
        return (
            UrlRecord::empty()
                .with_query(target.query().map(str::to_string))
                .with_hash(target.hash().map(str::to_string)),
            UrlType::Query,
        );
    }

    // Equal hashes fall through here too: re-stating the base's own hash is
    // a valid self-reference, and no hash at all is the empty reference.
    (
        UrlRecord::empty().with_hash(target.hash().map(str::to_string)),
        UrlType::Hash,
    )
}

fn segments(path: &str) -> Vec<&str> {
    path.strip_prefix(PATH_SEPARATOR)
        .unwrap_or(path)
        .split(PATH_SEPARATOR)
        .collect()
}

/// The directory segments of a path. The final segment is the file name,
/// except for a literal `..`, which names a directory (as in `directory_of`).
fn directory<'a, 'b>(segments: &'a [&'b str]) -> &'a [&'b str] {
    match segments.split_last() {
        Some((&last, directory)) if last != PARENT_DIR => directory,
        _ => segments,
    }
}

/// Builds the relative path from the directory of `base` to `target`.
///
/// Both paths are normalized and share a policy. Returns `None` when the base
/// directory keeps `..` segments that the target does not share, since no
/// relative path can climb back out of those. A target merged onto a
/// relative base always keeps the base's leading `..` segments, so this only
/// happens for opaque paths such as `data:../b`.
fn relative_path(base: &str, target: &str) -> Option<String> {
    let base_segments = segments(base);
    let base_directory = directory(&base_segments);

    let target_segments = segments(target);
    let target_directory = directory(&target_segments);

    let common = base_directory
        .iter()
        .zip(target_directory)
        .take_while(|(a, b)| a == b)
        .count();

    let climbed = &base_directory[common..];
    if climbed.contains(&PARENT_DIR) {
        return None;
    }

    let mut path = "../".repeat(climbed.len());
    path.push_str(&target_segments[common..].join("/"));
    if path.is_empty() {
        path.push_str(CURRENT_DIR_PREFIX);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge;
    use crate::normalize::normalize;
    use crate::printer::print;

    fn diff(base: &str, input: &str) -> String {
        let base = UrlRecord::parse(base);
        let base_kind = base.kind();
        let (target, target_kind) = merge(UrlRecord::parse(input), &base);
        let target = normalize(target, target_kind);
        let base = normalize(base, base_kind);
        let (reference, kind) = difference(&base, base_kind, target, target_kind);
        print(&reference, kind, false)
    }

    #[test]
    fn different_scheme_prints_target() {
        assert_eq!(diff("//foo.com", "https://input.com/x.js"), "https://input.com/x.js");
        assert_eq!(diff("http://foo.com/a", "https://foo.com/a"), "https://foo.com/a");
    }

    #[test]
    fn different_authority_is_scheme_relative() {
        assert_eq!(diff("https://foo.com/a", "https://bar.com/b?q"), "//bar.com/b?q");
        assert_eq!(diff("/a/b", "//bar.com/b"), "//bar.com/b");
    }

    #[test]
    fn different_directory_climbs() {
        assert_eq!(
            diff("https://foo.com/dir/", "https://foo.com/nested/file.js"),
            "../nested/file.js"
        );
        assert_eq!(diff("/a/b/c", "/x"), "../../x");
        assert_eq!(diff("/a/b", "/a/c/d"), "c/d");
    }

    #[test]
    fn same_directory_is_file_name() {
        assert_eq!(diff("https://foo.com/a/b", "https://foo.com/a/c?q#h"), "c?q#h");
    }

    #[test]
    fn directory_target_is_dot_slash() {
        assert_eq!(diff("/a/b", "/a/"), "./");
        assert_eq!(diff("/a/b/c", "/a/"), "../");
    }

    #[test]
    fn query_and_hash_only() {
        assert_eq!(
            diff(
                "https://foo.com/file?baseQuery#baseHash",
                "https://foo.com/file?baseQuery#hash"
            ),
            "#hash"
        );
        assert_eq!(diff("https://foo.com/file?a#h", "https://foo.com/file?b"), "?b");
    }

    #[test]
    fn dropped_query_or_hash_needs_path() {
        assert_eq!(diff("https://foo.com/a/file?q", "https://foo.com/a/file"), "file");
        assert_eq!(diff("https://foo.com/a/file?q#h", "https://foo.com/a/file?q"), "file?q");
    }

    #[test]
    fn identical_restates_base_hash() {
        assert_eq!(diff("/a?q#h", "/a?q#h"), "#h");
        assert_eq!(diff("/a?q", "/a?q"), "");
    }

    #[test]
    fn rooted_target_from_floating_base() {
        assert_eq!(diff("a/b", "/x?q"), "/x?q");
    }

    #[test]
    fn floating_paths() {
        assert_eq!(diff("a/b", "../c"), "../c");
        assert_eq!(diff("../a/x", "b"), "b");
        assert_eq!(diff("a/x", "../../b"), "../../b");
    }

    #[test]
    fn parent_target_under_parent_base() {
        for (base, input) in [
            ("../a", "."),
            ("../a", "a/.."),
            ("../a", "./"),
            ("./../a/a/../.", "a/.."),
        ] {
            let reference = diff(base, input);
            assert_eq!(reference, "./", "{base} {input}");
            assert_eq!(
                crate::resolve(&reference, Some(base)),
                crate::resolve(input, Some(base)),
                "{base} {input}"
            );
        }
        assert_eq!(diff("../a", "../x"), "../x");
        assert_eq!(diff("../b/x", "../.."), "../..");
    }

    #[test]
    fn colon_segment_is_escaped() {
        assert_eq!(diff("/a/b", "/a/c:d"), "./c:d");
    }

    #[test]
    fn unclimbable_parent_falls_back_to_target() {
        assert_eq!(diff("data:../b", "data:x"), "data:x");
    }

    #[test]
    fn relative_path_segments() {
        assert_eq!(relative_path("/", "/a"), Some("a".to_string()));
        assert_eq!(relative_path("..", "../x"), Some("x".to_string()));
        assert_eq!(relative_path("/a/b", "/a/b"), Some("b".to_string()));
        assert_eq!(relative_path("../a", ".."), Some("./".to_string()));
    }
}
