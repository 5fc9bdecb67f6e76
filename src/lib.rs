//! Service Bindings
//!
//! A client library for the workload projection of the [Kubernetes Service
//! Binding Specification]: an orchestration platform provisions "bindings"
//! (named groups of key/value secrets) by mounting them as directories of
//! flat files under a single root. This crate locates those bindings,
//! filters them by type and provider, and reads their entries, so
//! applications never hardcode credential paths.
//!
//! [Kubernetes Service Binding Specification]: https://servicebinding.io/spec/core/1.1.0/
//!
//! ## Features
//!
//! - **Discovery**: Resolve the bindings root from `$SERVICE_BINDING_ROOT`
//!   or an explicit path; absence of bindings is a normal state, never an
//!   error
//! - **Filtering**: Case-insensitive lookup by name, type, and provider,
//!   preserving collection order
//! - **Fail-closed access**: Invalid keys, missing entries, and unreadable
//!   files all read as absent
//! - **Caching**: An opt-in decorator that memoizes found values while
//!   still noticing late-arriving entries
//! - **Programmatic bindings**: In-memory bindings for tests and for
//!   sources other than the filesystem
//!
//! ## Architecture
//!
//! 1. **Trait** ([`Binding`]): the polymorphic core, raw byte lookup plus
//!    the shared accessors ([`Binding::get`], [`Binding::provider`],
//!    [`Binding::binding_type`]).
//!
//! 2. **Variants** (`binding/`): [`FilesystemBinding`] for projected
//!    directories, [`MapBinding`] for in-memory construction, and
//!    [`CacheBinding`] as a composition-based decorator.
//!
//! 3. **Discovery** (`discovery`): collection-level operations, from
//!    [`from_path`] and [`from_service_binding_root`] through [`cached`],
//!    [`find`], [`filter`], and [`filter_with_provider`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use service_bindings as bindings;
//! use service_bindings::Binding;
//!
//! let all = bindings::from_service_binding_root();
//! for binding in bindings::filter(&all, "postgresql") {
//!     if let Some(url) = binding.get("url") {
//!         println!("{} -> {url}", binding.name());
//!     }
//! }
//! ```
//!
//! Everything is synchronous: bindings live on the local filesystem and
//! reads are single whole-file operations, so no call blocks beyond
//! ordinary filesystem latency.

// Core modules
pub mod binding;
pub mod discovery;
pub mod error;

// Secret-key validation (applied by every variant before lookup)
mod secret;

// Re-export the binding abstraction and its variants
pub use binding::{Binding, CacheBinding, FilesystemBinding, MapBinding, PROVIDER, TYPE};

// Re-export the collection operations
pub use discovery::{
    cached, filter, filter_with_provider, find, from_path, from_service_binding_root,
    SERVICE_BINDING_ROOT,
};

// Re-export error types
pub use error::{BindingError, Result};
