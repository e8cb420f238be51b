pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod registry;
pub mod scanner;

pub use config::Config;
pub use error::{ExportError, ScanWarning, StoreError};
pub use model::{InstalledProgram, Root, RootSummary, ScanReport};
pub use registry::{ConfigStore, MemoryStore, SystemRegistry};
pub use scanner::Enumerator;
