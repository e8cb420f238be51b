use std::collections::HashMap;
use std::io;

use super::ConfigStore;
use crate::error::StoreError;
use crate::model::Root;

/// A single child record in a [`MemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryEntry {
    fields: Vec<(String, String)>,
    unreadable: bool,
}

impl MemoryEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// An entry whose open always fails with access denied.
    pub fn unreadable() -> Self {
        Self {
            fields: Vec::new(),
            unreadable: true,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Default)]
struct MemoryRoot {
    children: Vec<(String, MemoryEntry)>,
    fail_open: bool,
    fail_list: bool,
}

/// Handle into a [`MemoryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryKey {
    Root(Root),
    Child { root: Root, index: usize },
}

/// In-memory configuration store.
///
/// Roots that were never added behave like missing registry keys: opening
/// them fails with [`StoreError::NotFound`]. Field lookups are
/// case-insensitive, as they are in the Windows registry.
///
/// # Example
///
/// ```
/// use winclone::model::Root;
/// use winclone::registry::{MemoryEntry, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_child(Root::Native, "{A1}", MemoryEntry::new().field("DisplayName", "Alpha"))
///     .fail_open(Root::Wow6432);
/// # let _ = store;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    roots: HashMap<Root, MemoryRoot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty, openable root.
    pub fn with_root(mut self, root: Root) -> Self {
        self.roots.entry(root).or_default();
        self
    }

    /// Appends a child under `root`, creating the root if needed.
    pub fn with_child(mut self, root: Root, name: impl Into<String>, entry: MemoryEntry) -> Self {
        self.roots
            .entry(root)
            .or_default()
            .children
            .push((name.into(), entry));
        self
    }

    /// Makes opening `root` fail with access denied.
    pub fn fail_open(mut self, root: Root) -> Self {
        self.roots.entry(root).or_default().fail_open = true;
        self
    }

    /// Makes listing the children of `root` fail.
    pub fn fail_list(mut self, root: Root) -> Self {
        self.roots.entry(root).or_default().fail_list = true;
        self
    }

    fn root(&self, root: Root) -> Result<&MemoryRoot, StoreError> {
        self.roots.get(&root).ok_or(StoreError::NotFound)
    }
}

fn access_denied() -> StoreError {
    StoreError::Io(io::Error::from(io::ErrorKind::PermissionDenied))
}

impl ConfigStore for MemoryStore {
    type Key = MemoryKey;

    fn open_root(&self, root: Root) -> Result<MemoryKey, StoreError> {
        if self.root(root)?.fail_open {
            return Err(access_denied());
        }
        Ok(MemoryKey::Root(root))
    }

    fn open_child(&self, parent: &MemoryKey, name: &str) -> Result<MemoryKey, StoreError> {
        let MemoryKey::Root(root) = *parent else {
            return Err(StoreError::NotFound);
        };

        let index = self
            .root(root)?
            .children
            .iter()
            .position(|(child, _)| child.eq_ignore_ascii_case(name))
            .ok_or(StoreError::NotFound)?;

        if self.root(root)?.children[index].1.unreadable {
            return Err(access_denied());
        }

        Ok(MemoryKey::Child { root, index })
    }

    fn child_names(&self, key: &MemoryKey) -> Result<Vec<String>, StoreError> {
        match *key {
            MemoryKey::Root(root) => {
                let node = self.root(root)?;
                if node.fail_list {
                    return Err(StoreError::Io(io::Error::other("enumeration failed")));
                }
                Ok(node.children.iter().map(|(name, _)| name.clone()).collect())
            }
            MemoryKey::Child { .. } => Ok(Vec::new()),
        }
    }

    fn read_string(&self, key: &MemoryKey, field: &str) -> Result<String, StoreError> {
        let MemoryKey::Child { root, index } = *key else {
            return Err(StoreError::NotFound);
        };

        let (_, entry) = self
            .root(root)?
            .children
            .get(index)
            .ok_or(StoreError::NotFound)?;

        entry
            .fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.clone())
            .ok_or(StoreError::NotFound)
    }
}
