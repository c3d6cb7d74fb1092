//! Entry points: resolving and relativizing against a base.

use crate::constants::CURRENT_DIR_PREFIX;
use crate::diff::difference;
use crate::merge::merge;
use crate::normalize::normalize;
use crate::printer::print;
use crate::record::UrlRecord;
use crate::url_type::UrlType;

/// A base location parsed once and reused for many references.
///
/// Source-map consumers resolve every entry of `sources` against the same
/// `sourceRoot`; a `Resolver` avoids re-parsing that base for each one.
///
/// # Examples
///
/// ```
/// use resolve_uri::Resolver;
///
/// let resolver = Resolver::new("https://foo.com/dir/");
/// assert_eq!(resolver.resolve("bar/main.js.map"), "https://foo.com/dir/bar/main.js.map");
/// assert_eq!(resolver.resolve("/main.js.map"), "https://foo.com/main.js.map");
/// assert_eq!(resolver.relative("https://foo.com/nested/file.js"), "../nested/file.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    raw: String,
    base: Option<Base>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Base {
    record: UrlRecord,
    normalized: UrlRecord,
}

impl Resolver {
    /// Creates a resolver for `base`. An empty base means "no base".
    #[must_use]
    pub fn new(base: &str) -> Self {
        let parsed = (!base.is_empty()).then(|| {
            let record = UrlRecord::parse(base);
            let normalized = normalize(record.clone(), record.kind());
            Base { record, normalized }
        });

        Self {
            raw: base.to_string(),
            base: parsed,
        }
    }

    /// Returns the base this resolver was created with.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.raw
    }

    /// Returns the kind of the base, or `Empty` when there is none.
    #[must_use]
    pub fn base_kind(&self) -> UrlType {
        self.base
            .as_ref()
            .map_or(UrlType::Empty, |base| base.record.kind())
    }

    /// Resolves `input` against the base.
    ///
    /// The result is as qualified as the stronger of `input` and the base:
    /// a hash resolved against an absolute URL is an absolute URL, a relative
    /// path resolved against another relative path stays relative.
    #[must_use]
    pub fn resolve(&self, input: &str) -> String {
        if input.is_empty() && self.base.is_none() {
            return String::new();
        }

        let record = UrlRecord::parse(input);
        let (merged, kind) = match &self.base {
            Some(base) => merge(record, &base.record),
            None => {
                let kind = record.kind();
                (record, kind)
            }
        };

        let resolved = print(&normalize(merged, kind), kind, self.explicit_dot(input));
        tracing::trace!(input, base = %self.raw, output = %resolved, "resolved reference");
        resolved
    }

    /// Returns the shortest reference that resolves against the base to the
    /// same location as `input`.
    ///
    /// A base without path context (empty, query-only, hash-only) gives
    /// nothing to compare with, so `input` is only normalized.
    #[must_use]
    pub fn relative(&self, input: &str) -> String {
        let explicit_dot = self.explicit_dot(input);

        let relative = match self
            .base
            .as_ref()
            .filter(|base| base.record.kind().has_path_context())
        {
            Some(base) => {
                let (merged, kind) = merge(UrlRecord::parse(input), &base.record);
                let target = normalize(merged, kind);
                let (reference, reference_kind) = difference(
                    &base.normalized,
                    base.record.kind(),
                    target,
                    kind,
                );
                print(&reference, reference_kind, explicit_dot)
            }
            None => {
                let record = UrlRecord::parse(input);
                let kind = record.kind();
                print(&normalize(record, kind), kind, explicit_dot)
            }
        };

        tracing::trace!(input, base = %self.raw, output = %relative, "relativized reference");
        relative
    }

    /// The `./` style comes from whichever string supplied the directory:
    /// a relative-path base, or else the input itself.
    fn explicit_dot(&self, input: &str) -> bool {
        let source = match &self.base {
            Some(base) if base.record.kind() == UrlType::RelativePath => self.raw.as_str(),
            _ => input,
        };
        source.starts_with(CURRENT_DIR_PREFIX)
    }
}

/// Resolves `input` against an optional `base`.
///
/// # Examples
///
/// ```
/// use resolve_uri::resolve;
///
/// assert_eq!(
///     resolve("https://absolute.com/foo/./bar/../main.js.map", None),
///     "https://absolute.com/foo/main.js.map"
/// );
/// assert_eq!(
///     resolve("/foo/./bar/../main.js.map", Some("https://foo.com/dir/")),
///     "https://foo.com/foo/main.js.map"
/// );
/// assert_eq!(resolve("#hash", Some("https://foo.com/a?q")), "https://foo.com/a?q#hash");
/// assert_eq!(resolve("", None), "");
/// ```
#[must_use]
pub fn resolve(input: &str, base: Option<&str>) -> String {
    Resolver::new(base.unwrap_or_default()).resolve(input)
}

/// Returns the shortest reference from `base` to `input`.
///
/// Resolving the result against `base` gives the same location as resolving
/// `input` against `base`.
///
/// # Examples
///
/// ```
/// use resolve_uri::{relative, resolve};
///
/// let base = "https://foo.com/dir/";
/// let reference = relative(base, "https://foo.com/nested/file.js");
/// assert_eq!(reference, "../nested/file.js");
/// assert_eq!(resolve(&reference, Some(base)), "https://foo.com/nested/file.js");
/// ```
#[must_use]
pub fn relative(base: &str, input: &str) -> String {
    Resolver::new(base).relative(input)
}
