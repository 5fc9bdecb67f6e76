//! The core binding abstraction.
//!
//! A [`Binding`] is a named set of key/value secret entries projected by an
//! orchestration platform, as defined by the Kubernetes Service Binding
//! Specification's workload projection. Implementations differ only in
//! where the bytes come from; the accessors layered on top of
//! [`Binding::get_as_bytes`] are shared by all of them.
//!
//! # Error Handling
//!
//! Lookups fail closed: a key that is syntactically invalid, absent, or
//! unreadable is reported as `None` rather than an error, and callers are
//! expected to check. The single exception is [`Binding::binding_type`],
//! where absence means the binding is malformed for consumers that dispatch
//! on type.

use std::fmt;

use crate::error::BindingError;

/// Reserved entry key holding the provider of a binding.
pub const PROVIDER: &str = "provider";

/// Reserved entry key holding the type of a binding.
pub const TYPE: &str = "type";

/// A named, read-only collection of key/value secret entries.
///
/// A binding's name is stable for its lifetime and is the binding's
/// identity during discovery. Entries are opaque byte strings; only point
/// lookups are supported, never enumeration.
pub trait Binding: Send + Sync + fmt::Debug {
    /// Returns the contents of a binding entry in its raw byte form.
    ///
    /// `None` covers every flavor of absence: the key is not a valid
    /// secret key, the entry does not exist, or the backing store could
    /// not produce it.
    fn get_as_bytes(&self, key: &str) -> Option<Vec<u8>>;

    /// Returns the name of the binding.
    fn name(&self) -> String;

    /// Returns the contents of a binding entry as a UTF-8 decoded string
    /// with surrounding whitespace trimmed.
    ///
    /// This is the canonical way to read textual entries; use
    /// [`get_as_bytes`](Binding::get_as_bytes) for binary payloads.
    /// Decoding is lossy, so a present entry is never turned into a miss
    /// by stray non-UTF-8 bytes.
    fn get(&self, key: &str) -> Option<String> {
        self.get_as_bytes(key)
            .map(|v| String::from_utf8_lossy(&v).trim().to_string())
    }

    /// Returns the value of the reserved [`PROVIDER`] entry.
    fn provider(&self) -> Option<String> {
        self.get(PROVIDER)
    }

    /// Returns the value of the reserved [`TYPE`] entry.
    ///
    /// Unlike the other accessors this fails with
    /// [`BindingError::MissingType`] when the entry is absent: type is the
    /// mandatory discriminator for routing bindings to consumers, and a
    /// binding without one cannot participate in typed filtering.
    fn binding_type(&self) -> Result<String, BindingError> {
        self.get(TYPE)
            .ok_or_else(|| BindingError::MissingType { name: self.name() })
    }
}
