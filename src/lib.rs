//! Resolve and relativize URLs, paths, and source-map locations.
//!
//! This crate combines URL-like strings the way a browser resolves
//! `<a href>` against a document base, generalized to bare paths that have
//! no scheme or host at all (as found in source maps).
//!
//! # Overview
//!
//! Every string is one of seven kinds, ranked by how much context it carries:
//!
//! ```text
//! Empty < #hash < ?query < relative/path < /absolute/path < //host/path < scheme://host/path
//! ```
//!
//! Resolving borrows whatever a reference lacks from its base, then collapses
//! `.` and `..` segments. Rooted paths clamp `..` at the root; relative paths
//! with nothing to pop keep their `..` segments.
//!
//! # Quick Start
//!
//! ```rust
//! use resolve_uri::{relative, resolve};
//!
//! assert_eq!(
//!     resolve("bar/main.js.map", Some("https://foo.com/dir/")),
//!     "https://foo.com/dir/bar/main.js.map"
//! );
//! assert_eq!(resolve("foo/../../../bar/x", None), "../../bar/x");
//! assert_eq!(resolve("/../../../main.js.map", None), "/main.js.map");
//!
//! assert_eq!(
//!     relative("https://foo.com/file?baseQuery#baseHash", "https://foo.com/file?baseQuery#hash"),
//!     "#hash"
//! );
//! ```
//!
//! # Reusing a base
//!
//! ```rust
//! use resolve_uri::Resolver;
//!
//! let root = Resolver::new("webpack:///src/");
//! let sources: Vec<_> = ["a.ts", "../lib/b.ts"].iter().map(|s| root.resolve(s)).collect();
//! assert_eq!(sources, ["webpack:///src/a.ts", "webpack:///lib/b.ts"]);
//! ```
//!
//! # Guarantees
//!
//! Nothing here fails: every string classifies, parses, and prints. For a
//! base with path context, `resolve(&relative(base, input), Some(base))`
//! equals `resolve(input, Some(base))`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod diff;
mod error;
mod merge;
mod normalize;
pub mod prelude;
mod printer;
mod record;
mod resolver;
mod url_type;

pub use constants::{
    AUTHORITY_PREFIX, CURRENT_DIR, CURRENT_DIR_PREFIX, FILE_SCHEME, HASH_DELIMITER, PARENT_DIR,
    PATH_SEPARATOR, QUERY_DELIMITER, SCHEME_DELIMITER, USER_DELIMITER,
};
pub use error::UrlTypeError;
pub use normalize::{PathPolicy, normalize_path};
pub use record::{Authority, UrlRecord};
pub use resolver::{Resolver, relative, resolve};
pub use url_type::UrlType;
