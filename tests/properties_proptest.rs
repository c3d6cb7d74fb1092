//! Property-based tests for normalization, merging, and relativizing.
//!
//! Inputs are built from a small alphabet of path segments (including `.`,
//! `..`, and empty segments) so that the interesting collapsing cases come up
//! often.

use proptest::prelude::*;

use resolve_uri::{PathPolicy, UrlType, normalize_path, relative, resolve};

/// Strategies for generating reference strings.
mod strategies {
    use super::*;

    /// A single path segment, weighted towards dot segments.
    pub fn segment() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            3 => prop::sample::select(vec!["a", "b", "c"]),
            2 => Just(".."),
            1 => Just("."),
            1 => Just(""),
        ]
    }

    /// A segment that is never `.`, `..`, or empty.
    pub fn plain_segment() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["a", "b", "c", "main.js"])
    }

    /// A slash-joined run of 1-5 segments.
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("/"))
    }

    /// Optional `?query` and `#hash` suffixes.
    pub fn suffix(tag: &'static str) -> impl Strategy<Value = String> {
        (any::<bool>(), any::<bool>()).prop_map(move |(query, hash)| {
            let mut out = String::new();
            if query {
                out.push_str("?q");
                out.push_str(tag);
            }
            if hash {
                out.push_str("#h");
                out.push_str(tag);
            }
            out
        })
    }

    /// A base that supplies path context.
    pub fn base() -> impl Strategy<Value = String> {
        let shaped = prop_oneof![
            path(),
            path().prop_map(|p| format!("./{p}")),
            path().prop_map(|p| format!("/{p}")),
            path().prop_map(|p| format!("//foo.com/{p}")),
            Just("//foo.com".to_string()),
            path().prop_map(|p| format!("https://foo.com/{p}")),
            Just("https://foo.com".to_string()),
        ];

        (shaped, suffix("1"))
            .prop_map(|(base, suffix)| format!("{base}{suffix}"))
            .prop_filter("base must carry path context", |base| {
                UrlType::classify(base).has_path_context()
            })
    }

    /// Any reference, from empty to a full URL on another host.
    pub fn input() -> impl Strategy<Value = String> {
        let shaped = prop_oneof![
            Just(String::new()),
            path(),
            path().prop_map(|p| format!("./{p}")),
            path().prop_map(|p| format!("/{p}")),
            path().prop_map(|p| format!("//foo.com/{p}")),
            path().prop_map(|p| format!("//bar.com/{p}")),
            path().prop_map(|p| format!("https://foo.com/{p}")),
            path().prop_map(|p| format!("https://bar.com/{p}")),
            path().prop_map(|p| format!("http://foo.com/{p}")),
        ];

        (shaped, suffix("2")).prop_map(|(input, suffix)| format!("{input}{suffix}"))
    }

    /// A base whose kind is rooted (absolute path or stronger).
    pub fn rooted_base() -> impl Strategy<Value = String> {
        prop_oneof![
            path().prop_map(|p| format!("/{p}")),
            path().prop_map(|p| format!("//foo.com/{p}")),
            path().prop_map(|p| format!("https://foo.com/{p}")),
        ]
        .prop_filter("base must be rooted", |base| {
            UrlType::classify(base) >= UrlType::AbsolutePath
        })
    }
}

mod normalization {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn rooted_is_idempotent(p in path()) {
            let once = normalize_path(&p, PathPolicy::Rooted);
            prop_assert_eq!(normalize_path(&once, PathPolicy::Rooted), once.clone());
        }

        #[test]
        fn floating_is_idempotent(p in path()) {
            let once = normalize_path(&p, PathPolicy::Floating);
            prop_assert_eq!(normalize_path(&once, PathPolicy::Floating), once.clone());
        }

        #[test]
        fn rooted_always_starts_with_slash(p in path()) {
            prop_assert!(normalize_path(&p, PathPolicy::Rooted).starts_with('/'));
        }

        #[test]
        fn floating_never_starts_with_slash(p in path()) {
            prop_assert!(!normalize_path(&p, PathPolicy::Floating).starts_with('/'));
        }

        #[test]
        fn rooted_clamps_excess_parents(
            k in 1usize..5,
            rest in prop::collection::vec(plain_segment(), 1..4),
        ) {
            let rest = rest.join("/");
            let climbing = format!("/{}{rest}", "../".repeat(k));
            prop_assert_eq!(
                normalize_path(&climbing, PathPolicy::Rooted),
                normalize_path(&format!("/{rest}"), PathPolicy::Rooted)
            );
        }

        #[test]
        fn floating_keeps_excess_parents(
            m in 0usize..4,
            k in 1usize..4,
            rest in prop::collection::vec(plain_segment(), 1..4),
        ) {
            let rest = rest.join("/");
            let climbing = format!("{}{}{rest}", "d/".repeat(m), "../".repeat(m + k));
            prop_assert_eq!(
                normalize_path(&climbing, PathPolicy::Floating),
                format!("{}{rest}", "../".repeat(k))
            );
        }
    }
}

mod duality {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn relative_resolves_back(base in base(), input in input()) {
            let reference = relative(&base, &input);
            prop_assert_eq!(
                resolve(&reference, Some(base.as_str())),
                resolve(&input, Some(base.as_str())),
                "reference {:?}", reference
            );
        }

        #[test]
        fn relative_to_self_is_hash_or_empty(base in rooted_base()) {
            let reference = relative(&base, &base);
            prop_assert!(reference.is_empty() || reference.starts_with('#'), "{}", reference);
        }

        #[test]
        fn resolve_is_idempotent_on_rooted_results(base in rooted_base(), input in input()) {
            let once = resolve(&input, Some(base.as_str()));
            prop_assert_eq!(resolve(&once, None), once.clone());
        }
    }
}

mod monotonicity {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn resolved_kind_is_never_weaker(base in rooted_base(), input in input()) {
            let resolved = UrlType::classify(&resolve(&input, Some(base.as_str())));
            prop_assert!(resolved >= UrlType::classify(&base));
            prop_assert!(resolved >= UrlType::classify(&input));
        }
    }
}
