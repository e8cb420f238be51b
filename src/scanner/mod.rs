//! Installed-program enumeration.
//!
//! The [`Enumerator`] walks both `Uninstall` roots in [`Root::ALL`] order and
//! turns every child key carrying a `DisplayName` into an
//! [`InstalledProgram`].
//!
//! Failures come in two kinds:
//!
//! | Failure | Outcome |
//! |---------|---------|
//! | Root cannot be opened or listed | [`ScanWarning`], root contributes nothing |
//! | Child cannot be opened, or has no `DisplayName` | Silently skipped |
//!
//! # Example
//!
//! ```
//! use winclone::model::Root;
//! use winclone::registry::{MemoryEntry, MemoryStore};
//! use winclone::scanner::Enumerator;
//!
//! let store = MemoryStore::new()
//!     .with_child(Root::Native, "{A1}", MemoryEntry::new().field("DisplayName", "Alpha"))
//!     .with_root(Root::Wow6432);
//!
//! let report = Enumerator::new(store).enumerate_all();
//! assert_eq!(report.programs[0].name, "Alpha");
//! assert!(report.warnings.is_empty());
//! ```

use tracing::{debug, info, warn};

use crate::error::ScanWarning;
use crate::model::{InstalledProgram, Root, RootSummary, ScanReport};
use crate::registry::ConfigStore;

/// Registry value holding the user-facing program title.
pub const DISPLAY_NAME: &str = "DisplayName";
/// Registry value holding the program version.
pub const DISPLAY_VERSION: &str = "DisplayVersion";
/// Registry value holding the install directory.
pub const INSTALL_LOCATION: &str = "InstallLocation";

/// How often a progress event is emitted while walking a root.
const PROGRESS_INTERVAL: usize = 50;

/// Scans a [`ConfigStore`] for installed programs.
///
/// Holds no state besides the store, so a single enumerator can be scanned
/// any number of times.
pub struct Enumerator<S> {
    store: S,
}

impl<S: ConfigStore> Enumerator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Scans every root in [`Root::ALL`] order.
    ///
    /// Never fails: a root that cannot be read adds a warning and the scan
    /// moves on to the next root.
    pub fn enumerate_all(&self) -> ScanReport {
        let mut report = ScanReport::default();

        for root in Root::ALL {
            match self.enumerate_root(root) {
                Ok((programs, children)) => {
                    info!(root = %root, children, programs = programs.len(), "scanned root");
                    report.roots.push(RootSummary {
                        root,
                        children,
                        programs: programs.len(),
                    });
                    report.programs.extend(programs);
                }
                Err(warning) => {
                    warn!("{}", warning);
                    report.warnings.push(warning);
                }
            }
        }

        report
    }

    /// Scans a single root.
    ///
    /// Returns the root's programs in listed order along with the number of
    /// child keys that were listed.
    pub fn enumerate_root(&self, root: Root) -> Result<(Vec<InstalledProgram>, usize), ScanWarning> {
        let key = self
            .store
            .open_root(root)
            .map_err(|source| ScanWarning::RootOpen { root, source })?;

        let names = self
            .store
            .child_names(&key)
            .map_err(|source| ScanWarning::RootList { root, source })?;

        debug!(root = %root, path = root.path(), count = names.len(), "listing subkeys");

        let total = names.len();
        let mut programs = Vec::new();

        for (i, name) in names.iter().enumerate() {
            if i > 0 && i % PROGRESS_INTERVAL == 0 {
                debug!(root = %root, "processed {}/{} subkeys", i, total);
            }

            if let Some(program) = self.read_program(&key, name) {
                programs.push(program);
            }
        }

        Ok((programs, total))
    }

    /// Extracts one program from a child key.
    ///
    /// Returns `None` when the child cannot be opened or carries no usable
    /// `DisplayName`. A name that is present but only whitespace is kept as
    /// an empty string.
    fn read_program(&self, parent: &S::Key, name: &str) -> Option<InstalledProgram> {
        // Child-level failures are skipped without logging
        let child = self.store.open_child(parent, name).ok()?;

        let display_name = self.store.read_string(&child, DISPLAY_NAME).ok()?;
        if display_name.is_empty() {
            return None;
        }

        Some(InstalledProgram {
            name: display_name.trim().to_string(),
            version: self.read_optional(&child, DISPLAY_VERSION),
            install_path: self.read_optional(&child, INSTALL_LOCATION),
        })
    }

    fn read_optional(&self, key: &S::Key, field: &str) -> String {
        self.store
            .read_string(key, field)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MemoryEntry, MemoryStore};

    fn named(name: &str) -> MemoryEntry {
        MemoryEntry::new().field(DISPLAY_NAME, name)
    }

    fn names(report: &ScanReport) -> Vec<&str> {
        report.programs.iter().map(|p| p.name.as_str()).collect()
    }

    fn two_root_store() -> MemoryStore {
        MemoryStore::new()
            .with_child(Root::Native, "a1", named("A1"))
            .with_child(Root::Native, "a2", named("A2"))
            .with_child(Root::Wow6432, "b1", named("B1"))
            .with_child(Root::Wow6432, "b2", named("B2"))
    }

    #[test]
    fn test_native_root_precedes_wow64_root() {
        let report = Enumerator::new(two_root_store()).enumerate_all();

        assert_eq!(names(&report), vec!["A1", "A2", "B1", "B2"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_listed_order_is_preserved() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "z", named("Zulu"))
            .with_child(Root::Native, "m", named("Mike"))
            .with_child(Root::Native, "a", named("Alpha"))
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();
        assert_eq!(names(&report), vec!["Zulu", "Mike", "Alpha"]);
    }

    #[test]
    fn test_child_without_display_name_is_skipped() {
        let store = MemoryStore::new()
            .with_child(
                Root::Native,
                "KB123456",
                MemoryEntry::new()
                    .field(DISPLAY_VERSION, "1.0")
                    .field(INSTALL_LOCATION, r"C:\Patch"),
            )
            .with_child(Root::Native, "app", named("App"))
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(names(&report), vec!["App"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let store = MemoryStore::new()
            .with_child(
                Root::Native,
                "foo",
                MemoryEntry::new()
                    .field(DISPLAY_NAME, "  Foo  ")
                    .field(DISPLAY_VERSION, " 2.1 \t")
                    .field(INSTALL_LOCATION, "  C:\\Foo\\ "),
            )
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(
            report.programs,
            vec![InstalledProgram::new("Foo")
                .with_version("2.1")
                .with_path(r"C:\Foo\")]
        );
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "bare", named("Bare"))
            .with_child(
                Root::Native,
                "versioned",
                named("Versioned").field(DISPLAY_VERSION, "3"),
            )
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(report.programs[0].version, "");
        assert_eq!(report.programs[0].install_path, "");
        assert_eq!(report.programs[1].version, "3");
        assert_eq!(report.programs[1].install_path, "");
    }

    #[test]
    fn test_whitespace_only_name_is_kept_empty() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "blank", named("   "))
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(report.programs.len(), 1);
        assert_eq!(report.programs[0].name, "");
    }

    #[test]
    fn test_literally_empty_name_is_skipped() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "empty", named(""))
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();
        assert!(report.programs.is_empty());
    }

    #[test]
    fn test_unreadable_child_is_skipped_without_warning() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "locked", MemoryEntry::unreadable())
            .with_child(Root::Native, "open", named("Open"))
            .with_root(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(names(&report), vec!["Open"]);
        assert!(report.warnings.is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_child_failures_are_not_logged() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "locked-entry", MemoryEntry::unreadable())
            .with_child(Root::Native, "nameless-entry", MemoryEntry::new())
            .with_child(Root::Native, "open", named("Open"))
            .with_root(Root::Wow6432);

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            Enumerator::new(store).enumerate_all()
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(names(&report), vec!["Open"]);
        assert!(output.contains("listing subkeys"));
        assert!(!output.contains("locked-entry"));
        assert!(!output.contains("nameless-entry"));
    }

    #[test]
    fn test_native_root_open_failure() {
        let report = Enumerator::new(two_root_store().fail_open(Root::Native)).enumerate_all();

        assert_eq!(names(&report), vec!["B1", "B2"]);
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            report.warnings[0],
            ScanWarning::RootOpen {
                root: Root::Native,
                ..
            }
        ));
    }

    #[test]
    fn test_wow64_root_open_failure() {
        let report = Enumerator::new(two_root_store().fail_open(Root::Wow6432)).enumerate_all();

        assert_eq!(names(&report), vec!["A1", "A2"]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].root(), Root::Wow6432);
    }

    #[test]
    fn test_both_roots_fail() {
        let store = two_root_store()
            .fail_open(Root::Native)
            .fail_open(Root::Wow6432);

        let report = Enumerator::new(store).enumerate_all();

        assert!(report.programs.is_empty());
        assert!(report.roots.is_empty());
        let roots: Vec<Root> = report.warnings.iter().map(|w| w.root()).collect();
        assert_eq!(roots, vec![Root::Native, Root::Wow6432]);
    }

    #[test]
    fn test_missing_root_is_a_warning() {
        let store = MemoryStore::new().with_child(Root::Native, "a", named("A"));

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(names(&report), vec!["A"]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].root(), Root::Wow6432);
    }

    #[test]
    fn test_listing_failure_is_a_warning() {
        let report = Enumerator::new(two_root_store().fail_list(Root::Native)).enumerate_all();

        assert_eq!(names(&report), vec!["B1", "B2"]);
        assert!(matches!(
            report.warnings[0],
            ScanWarning::RootList {
                root: Root::Native,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicates_across_roots_are_kept() {
        let entry = named("Shared").field(DISPLAY_VERSION, "1.0");
        let store = MemoryStore::new()
            .with_child(Root::Native, "shared", entry.clone())
            .with_child(Root::Wow6432, "shared", entry);

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(report.programs.len(), 2);
        assert_eq!(report.programs[0], report.programs[1]);
    }

    #[test]
    fn test_root_summaries_count_children_and_programs() {
        let store = MemoryStore::new()
            .with_child(Root::Native, "a", named("A"))
            .with_child(Root::Native, "patch", MemoryEntry::new())
            .with_child(Root::Wow6432, "b", named("B"));

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(
            report.roots,
            vec![
                RootSummary {
                    root: Root::Native,
                    children: 2,
                    programs: 1,
                },
                RootSummary {
                    root: Root::Wow6432,
                    children: 1,
                    programs: 1,
                },
            ]
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        let store = MemoryStore::new()
            .with_child(
                Root::Native,
                "C1",
                named("Alpha")
                    .field(DISPLAY_VERSION, "1.0")
                    .field(INSTALL_LOCATION, r"C:\Alpha"),
            )
            .with_child(Root::Native, "C2", MemoryEntry::new().field(DISPLAY_VERSION, "9"))
            .with_child(Root::Wow6432, "C3", named("Beta"));

        let report = Enumerator::new(store).enumerate_all();

        assert_eq!(
            report.programs,
            vec![
                InstalledProgram::new("Alpha")
                    .with_version("1.0")
                    .with_path(r"C:\Alpha"),
                InstalledProgram::new("Beta"),
            ]
        );
    }

    #[test]
    fn test_enumerator_is_reusable() {
        let enumerator = Enumerator::new(two_root_store());

        let first = enumerator.enumerate_all();
        let second = enumerator.enumerate_all();

        assert_eq!(first.programs, second.programs);
    }
}
