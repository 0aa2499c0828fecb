//! # PhishGuard - Heuristic Phishing Detection
//!
//! PhishGuard flags URLs and free text that look like phishing using
//! deliberately simple lexical rules, and keeps a deduplicated CSV log of
//! everything it has flagged.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use phishguard::detector::Detector;
//! use phishguard::storage::EntryStore;
//!
//! let store = EntryStore::open("phishing_db.csv")?;
//! let detector = Detector::new(&store);
//!
//! let outcome = detector.scan("http://secure-login-example.com", "")?;
//! assert!(outcome.suspicious);
//!
//! for entry in store.list() {
//!     println!("{} - {}", entry.subject, entry.reason);
//! }
//! # Ok::<(), phishguard::StorageError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`heuristics`] - Pure URL and text classifiers
//! - [`detector`] - Scan orchestration and the `EntrySink` seam
//! - [`storage`] - CSV-backed, deduplicated report log
//! - [`config`] - Paths and settings
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod heuristics;
pub mod output;
pub mod storage;

// Re-export commonly used types
pub use detector::{Detector, EntrySink, Reason, ScanOutcome};
pub use error::{CliError, ConfigError, StorageError};
pub use heuristics::{classify_text, classify_url};
pub use storage::{Entry, EntryStore};
