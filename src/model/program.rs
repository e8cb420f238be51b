use serde::{Deserialize, Serialize};

/// One of the two `Uninstall` keys under `HKEY_LOCAL_MACHINE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    /// Native (64-bit) registrations.
    Native,
    /// WOW64 (32-bit) registrations.
    Wow6432,
}

impl Root {
    /// Scan order: native first, then WOW64.
    pub const ALL: [Root; 2] = [Root::Native, Root::Wow6432];

    pub fn path(&self) -> &'static str {
        match self {
            Root::Native => r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall",
            Root::Wow6432 => r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Root::Native => "64-bit",
            Root::Wow6432 => "32-bit",
        }
    }
}

impl std::fmt::Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An installed application as registered under an `Uninstall` key.
///
/// `version` and `install_path` are empty strings when the registry entry
/// does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstalledProgram {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Path")]
    pub install_path: String,
}

impl InstalledProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: String::new(),
            install_path: String::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.install_path = path.into();
        self
    }
}

/// Per-root totals reported after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSummary {
    pub root: Root,
    /// Child keys listed under the root.
    pub children: usize,
    /// Records the root contributed to the result.
    pub programs: usize,
}
