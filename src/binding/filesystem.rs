//! Filesystem-backed bindings.
//!
//! The platform projects a binding as a directory of flat files: one
//! regular file per entry, file name = key, file content = value. This is
//! the variant produced by discovery; consumers normally obtain it through
//! [`from_path`](crate::discovery::from_path) rather than constructing it
//! directly.

use std::fs;
use std::path::PathBuf;

use crate::binding::traits::Binding;
use crate::secret::is_valid_secret_key;

/// A binding backed by a volume-mounted directory.
///
/// Lookups fail closed: a key that is syntactically invalid, names a
/// missing path, names anything other than a regular file (directories,
/// symlinks to directories, special files), or cannot be read is reported
/// as absent. Read failures surface only as a trace event, never as an
/// error value.
#[derive(Debug, Clone)]
pub struct FilesystemBinding {
    root: PathBuf,
}

impl FilesystemBinding {
    /// Creates a binding rooted at `root`.
    ///
    /// The directory does not need to exist; lookups against a missing
    /// root simply find nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Binding for FilesystemBinding {
    fn get_as_bytes(&self, key: &str) -> Option<Vec<u8>> {
        if !is_valid_secret_key(key) {
            return None;
        }

        let path = self.root.join(key);

        // Metadata follows symlinks, so a symlink to a regular file is an
        // entry while a symlink to a directory is not.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            _ => return None,
        }

        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::trace!(path = %path.display(), error = %err, "binding entry unreadable");
                None
            }
        }
    }

    fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
