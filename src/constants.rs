//! Delimiters and special names shared by the parser and the printer.

/// Separates the scheme from the rest of an absolute URL.
pub const SCHEME_DELIMITER: char = ':';

/// Path segment separator.
pub const PATH_SEPARATOR: char = '/';

/// Introduces the query component.
pub const QUERY_DELIMITER: char = '?';

/// Introduces the hash (fragment) component.
pub const HASH_DELIMITER: char = '#';

/// Introduces an authority (`//user@host:port`).
pub const AUTHORITY_PREFIX: &str = "//";

/// Separates the user from the host inside an authority.
pub const USER_DELIMITER: char = '@';

/// The `file` scheme, whose URLs always carry a (possibly empty) host.
pub const FILE_SCHEME: &str = "file";

/// Prefix marking an explicit same-directory reference.
pub const CURRENT_DIR_PREFIX: &str = "./";

/// The current-directory path segment.
pub const CURRENT_DIR: &str = ".";

/// The parent-directory path segment.
pub const PARENT_DIR: &str = "..";
