//! Read-only access to the hierarchical key/value store holding `Uninstall`
//! records.
//!
//! The scanner only ever talks to a [`ConfigStore`]. Two implementations
//! exist:
//!
//! | Store | Backing | Platforms |
//! |-------|---------|-----------|
//! | [`SystemRegistry`] | `HKEY_LOCAL_MACHINE` via `winreg` | Windows (elsewhere every root reports unsupported) |
//! | [`MemoryStore`] | In-memory tree | All |

mod memory;
mod system;

pub use memory::{MemoryEntry, MemoryKey, MemoryStore};
pub use system::SystemRegistry;

use crate::error::StoreError;
use crate::model::Root;

/// Capability set the scanner needs from a configuration store.
///
/// Keys are plain values: a key is released when it is dropped, so every
/// handle lives exactly as long as the scope that opened it.
pub trait ConfigStore {
    /// An open key.
    type Key;

    /// Opens one of the well-known roots for reading.
    fn open_root(&self, root: Root) -> Result<Self::Key, StoreError>;

    /// Opens a direct child of `parent` for reading.
    fn open_child(&self, parent: &Self::Key, name: &str) -> Result<Self::Key, StoreError>;

    /// Lists the names of the immediate children of `key`, in store order.
    fn child_names(&self, key: &Self::Key) -> Result<Vec<String>, StoreError>;

    /// Reads a string-valued field of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the field is absent.
    fn read_string(&self, key: &Self::Key, field: &str) -> Result<String, StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    type Key = S::Key;

    fn open_root(&self, root: Root) -> Result<Self::Key, StoreError> {
        (**self).open_root(root)
    }

    fn open_child(&self, parent: &Self::Key, name: &str) -> Result<Self::Key, StoreError> {
        (**self).open_child(parent, name)
    }

    fn child_names(&self, key: &Self::Key) -> Result<Vec<String>, StoreError> {
        (**self).child_names(key)
    }

    fn read_string(&self, key: &Self::Key, field: &str) -> Result<String, StoreError> {
        (**self).read_string(key, field)
    }
}
