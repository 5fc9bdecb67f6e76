//! Error types for binding access.
//!
//! Almost every failure in this crate is modeled as absence (`None` or an
//! empty collection): a missing root, a missing key, invalid key syntax,
//! and an unreadable entry all fail closed. The one exception is a binding
//! without a `type` entry, which is malformed for consumers that dispatch
//! on type.

use thiserror::Error;

/// Errors surfaced by binding accessors.
#[derive(Error, Debug)]
pub enum BindingError {
    /// The binding has no `type` entry.
    ///
    /// `type` is the discriminator used to route bindings to consumers, so
    /// its absence is an explicit failure rather than a lookup miss.
    #[error("binding {name} does not contain a type")]
    MissingType {
        /// Name of the offending binding.
        name: String,
    },
}

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, BindingError>;
