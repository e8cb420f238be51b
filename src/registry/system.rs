//! The live Windows registry.
//!
//! Both roots live under `HKEY_LOCAL_MACHINE`. On non-Windows targets the
//! store still exists so the CLI builds everywhere, but every root reports
//! [`StoreError::Unsupported`].

use super::ConfigStore;
use crate::error::StoreError;
use crate::model::Root;

/// Read-only view of `HKEY_LOCAL_MACHINE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRegistry;

impl SystemRegistry {
    pub fn new() -> Self {
        SystemRegistry
    }
}

#[cfg(windows)]
impl ConfigStore for SystemRegistry {
    type Key = winreg::RegKey;

    fn open_root(&self, root: Root) -> Result<Self::Key, StoreError> {
        use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_ENUMERATE_SUB_KEYS, KEY_QUERY_VALUE};

        winreg::RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(root.path(), KEY_ENUMERATE_SUB_KEYS | KEY_QUERY_VALUE)
            .map_err(StoreError::from_io)
    }

    fn open_child(&self, parent: &Self::Key, name: &str) -> Result<Self::Key, StoreError> {
        use winreg::enums::KEY_QUERY_VALUE;

        parent
            .open_subkey_with_flags(name, KEY_QUERY_VALUE)
            .map_err(StoreError::from_io)
    }

    fn child_names(&self, key: &Self::Key) -> Result<Vec<String>, StoreError> {
        key.enum_keys()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(StoreError::from_io)
    }

    fn read_string(&self, key: &Self::Key, field: &str) -> Result<String, StoreError> {
        key.get_value::<String, _>(field)
            .map_err(StoreError::from_io)
    }
}

#[cfg(not(windows))]
impl ConfigStore for SystemRegistry {
    type Key = std::convert::Infallible;

    fn open_root(&self, _root: Root) -> Result<Self::Key, StoreError> {
        Err(StoreError::Unsupported)
    }

    fn open_child(&self, parent: &Self::Key, _name: &str) -> Result<Self::Key, StoreError> {
        match *parent {}
    }

    fn child_names(&self, key: &Self::Key) -> Result<Vec<String>, StoreError> {
        match *key {}
    }

    fn read_string(&self, key: &Self::Key, _field: &str) -> Result<String, StoreError> {
        match *key {}
    }
}
