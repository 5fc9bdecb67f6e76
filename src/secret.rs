//! Secret-key validation.
//!
//! Binding entries are projected as files named after their keys, and the
//! platform restricts those names to the Kubernetes Secret key character
//! set. Every binding variant applies this predicate before attempting a
//! lookup, so a key that fails it is reported as absent no matter what the
//! backing store contains.

use once_cell::sync::Lazy;
use regex::Regex;

static VALID_SECRET_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-_.]+$").unwrap());

/// Tests whether a string is a valid Kubernetes Secret key: one or more
/// characters drawn from `[A-Za-z0-9]`, `-`, `_`, and `.`.
pub(crate) fn is_valid_secret_key(key: &str) -> bool {
    VALID_SECRET_KEY.is_match(key)
}
