//! Binding variants.
//!
//! Everything here implements the [`Binding`] trait: a filesystem-backed
//! variant for platform-projected directories, an in-memory variant for
//! tests and programmatic construction, and a caching decorator that can
//! wrap any other variant. Composition is the only relationship between
//! them: the decorator holds an owned delegate, nothing inherits from
//! anything.

pub mod cache;
pub mod filesystem;
pub mod map;
pub mod traits;

// Re-export the trait and its reserved keys
pub use traits::{Binding, PROVIDER, TYPE};

// Re-export the variants
pub use cache::CacheBinding;
pub use filesystem::FilesystemBinding;
pub use map::MapBinding;
