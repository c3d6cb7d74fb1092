//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use resolve_uri::prelude::*;
//!
//! let resolver = Resolver::new("/root/");
//! assert_eq!(resolver.resolve("a/../b"), "/root/b");
//! assert_eq!(UrlType::classify("/root/"), UrlType::AbsolutePath);
//! ```
//!
//! The delimiter constants are left out; import them from the crate root.

pub use crate::{
    // Entry points
    Resolver, relative, resolve,
    // Core types
    Authority, PathPolicy, UrlRecord, UrlType, normalize_path,
    // Errors
    UrlTypeError,
};
