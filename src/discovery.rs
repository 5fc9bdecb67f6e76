//! Discovery and filtering of binding collections.
//!
//! The platform mounts every binding beneath a single root directory named
//! by the [`SERVICE_BINDING_ROOT`] environment variable: one subdirectory
//! per binding, one regular file per entry. The functions here turn that
//! layout into a collection of [`Binding`] values and narrow a collection
//! down to the bindings a consumer needs.
//!
//! Absence of bindings is a normal state: an unset variable, a missing
//! root, and an empty filter result all yield an empty collection, never an
//! error. Local development without any mounted bindings is expected to
//! work.

use std::fs;
use std::path::Path;

use crate::binding::{Binding, CacheBinding, FilesystemBinding};

/// Environment variable naming the bindings filesystem root, as specified
/// by the Kubernetes Service Binding Specification.
pub const SERVICE_BINDING_ROOT: &str = "SERVICE_BINDING_ROOT";

/// Creates a binding collection from the directory at `root`.
///
/// Every immediate subdirectory of `root` becomes a [`FilesystemBinding`];
/// other children are skipped. Collection order follows the directory
/// listing, which is platform-dependent. A missing or non-directory `root`
/// yields an empty collection.
pub fn from_path(root: impl AsRef<Path>) -> Vec<Box<dyn Binding>> {
    let root = root.as_ref();

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => {
            tracing::debug!(root = %root.display(), "bindings root missing or not a directory");
            return Vec::new();
        }
    }

    let children = match fs::read_dir(root) {
        Ok(children) => children,
        Err(err) => {
            tracing::debug!(root = %root.display(), error = %err, "unable to list bindings root");
            return Vec::new();
        }
    };

    let mut bindings: Vec<Box<dyn Binding>> = Vec::new();
    for child in children.flatten() {
        // Directory-entry file types do not follow symlinks: a symlinked
        // child is not treated as a binding directory.
        let is_dir = child.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            tracing::trace!(entry = %child.path().display(), "skipping non-directory entry");
            continue;
        }

        bindings.push(Box::new(FilesystemBinding::new(child.path())));
    }

    tracing::debug!(root = %root.display(), count = bindings.len(), "discovered bindings");
    bindings
}

/// Creates a binding collection from the root named by the
/// [`SERVICE_BINDING_ROOT`] environment variable.
///
/// The environment is read once, here, and the resolved path is handed to
/// [`from_path`] explicitly. When the variable is unset an empty collection
/// is returned.
pub fn from_service_binding_root() -> Vec<Box<dyn Binding>> {
    match std::env::var_os(SERVICE_BINDING_ROOT) {
        Some(root) => from_path(root),
        None => {
            tracing::debug!(variable = SERVICE_BINDING_ROOT, "bindings root variable unset");
            Vec::new()
        }
    }
}

/// Wraps every binding in the collection with a fresh
/// [`CacheBinding`].
///
/// The input collection is consumed; each element becomes the owned
/// delegate of its wrapper and is otherwise untouched.
pub fn cached(bindings: Vec<Box<dyn Binding>>) -> Vec<Box<dyn Binding>> {
    bindings
        .into_iter()
        .map(|b| Box::new(CacheBinding::new(b)) as Box<dyn Binding>)
        .collect()
}

/// Returns the first binding whose name matches `name`.
///
/// Comparison is case-insensitive. Duplicate names resolve to the first
/// match in collection order.
pub fn find<'a>(bindings: &'a [Box<dyn Binding>], name: &str) -> Option<&'a dyn Binding> {
    bindings
        .iter()
        .find(|b| b.name().eq_ignore_ascii_case(name))
        .map(|b| b.as_ref())
}

/// Returns the bindings with the given type, preserving collection order.
///
/// Equivalent to [`filter_with_provider`] with an empty provider.
pub fn filter<'a>(bindings: &'a [Box<dyn Binding>], binding_type: &str) -> Vec<&'a dyn Binding> {
    filter_with_provider(bindings, binding_type, "")
}

/// Returns the bindings with the given type and provider, preserving
/// collection order.
///
/// An empty `binding_type` or `provider` leaves that argument unfiltered;
/// with both empty the entire input is returned unchanged. Comparisons are
/// case-insensitive. A binding whose type cannot be retrieved is excluded
/// whenever a non-empty `binding_type` is supplied, and likewise for
/// `provider`.
pub fn filter_with_provider<'a>(
    bindings: &'a [Box<dyn Binding>],
    binding_type: &str,
    provider: &str,
) -> Vec<&'a dyn Binding> {
    let mut matches = Vec::new();

    for binding in bindings {
        if !binding_type.is_empty() {
            match binding.binding_type() {
                Ok(t) if t.eq_ignore_ascii_case(binding_type) => {}
                _ => continue,
            }
        }

        if !provider.is_empty() {
            match binding.provider() {
                Some(p) if p.eq_ignore_ascii_case(provider) => {}
                _ => continue,
            }
        }

        matches.push(binding.as_ref());
    }

    matches
}
