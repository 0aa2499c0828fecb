//! CSV-backed report store.
//!
//! Keeps the whole report log in memory as an insertion-ordered list and
//! rewrites the backing file after every successful insert. The pair
//! `(url, description)` is the uniqueness key; it is compared exactly, with
//! no normalization.

use super::decode::{DECODE_CHAIN, LENIENT_DECODING};
use crate::error::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Column names of the persisted table.
pub const CSV_HEADER: [&str; 2] = ["url", "description"];

/// A recorded suspicious observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// The URL or text that triggered detection.
    #[serde(rename = "url")]
    pub subject: String,
    /// Human-readable cause of the detection.
    #[serde(rename = "description")]
    pub reason: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    fn matches(&self, subject: &str, reason: &str) -> bool {
        self.subject == subject && self.reason == reason
    }
}

/// Deduplicated, order-preserving report log backed by a CSV file.
///
/// All reads and writes of the collection go through one mutex, so the
/// duplicate check, the push and the file rewrite happen as a unit.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Mutex<Vec<Entry>>,
}

impl EntryStore {
    /// Open the store at `path`, loading whatever is already there.
    ///
    /// A missing file is created with just the header row.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let store = Self {
            path: path.into(),
            entries: Mutex::new(Vec::new()),
        };
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file, replacing the in-memory collection.
    ///
    /// Unreadable or malformed files never fail the call: every decoding in
    /// [`DECODE_CHAIN`] is tried with a strict parse, then a lenient parse
    /// keeps whatever rows it can. The store comes up empty only when no
    /// `url`/`description` header is found. Only creating a missing file can
    /// return an error.
    pub fn load(&self) -> StorageResult<Vec<Entry>> {
        let mut entries = self.lock();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "creating empty report database");
                write_entries(&self.path, &[])?;
                entries.clear();
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "report database unreadable; starting empty");
                entries.clear();
                return Ok(Vec::new());
            }
        };

        *entries = decode_entries(&bytes).unwrap_or_else(|| {
            tracing::warn!(
                path = %self.path.display(),
                "report database has no url/description header; starting empty"
            );
            Vec::new()
        });

        tracing::debug!(count = entries.len(), "loaded report database");
        Ok(entries.clone())
    }

    /// Re-read the backing file to pick up external edits.
    pub fn reload(&self) -> StorageResult<Vec<Entry>> {
        self.load()
    }

    /// Append `(subject, reason)` unless that exact pair is already stored.
    ///
    /// Returns `true` when a row was inserted. The whole collection is
    /// written back before returning; if that write fails the insert is
    /// undone and the error is returned.
    pub fn append_if_new(&self, subject: &str, reason: &str) -> StorageResult<bool> {
        let mut entries = self.lock();

        if entries.iter().any(|e| e.matches(subject, reason)) {
            tracing::debug!(subject, reason, "entry already recorded");
            return Ok(false);
        }

        entries.push(Entry::new(subject, reason));

        if let Err(e) = write_entries(&self.path, &entries) {
            entries.pop();
            return Err(e);
        }

        Ok(true)
    }

    /// Snapshot of all entries in insertion order.
    pub fn list(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Whether the exact pair is already stored.
    pub fn contains(&self, subject: &str, reason: &str) -> bool {
        self.lock().iter().any(|e| e.matches(subject, reason))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Try each strict decoding in turn, then a lenient parse of lossy UTF-8.
///
/// `None` only when even the lenient parse finds no `url`/`description` header.
fn decode_entries(bytes: &[u8]) -> Option<Vec<Entry>> {
    for decoding in DECODE_CHAIN {
        let Some(text) = decoding.decode(bytes) else {
            tracing::debug!(%decoding, "decoding failed");
            continue;
        };

        match parse_entries(&text) {
            Ok(entries) => {
                tracing::debug!(%decoding, "parsed report database");
                return Some(entries);
            }
            Err(e) => tracing::debug!(%decoding, error = %e, "parse failed"),
        }
    }

    let text = LENIENT_DECODING.decode(bytes)?;
    match parse_entries_lenient(&text) {
        Ok(entries) => {
            tracing::warn!(
                decoding = %LENIENT_DECODING,
                "report database is malformed; loaded it leniently"
            );
            Some(entries)
        }
        Err(e) => {
            tracing::debug!(decoding = %LENIENT_DECODING, error = %e, "lenient parse failed");
            None
        }
    }
}

/// Positions of the `url` and `description` columns in a header row.
fn column_indices(headers: &csv::StringRecord) -> StorageResult<(usize, usize)> {
    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| StorageError::LoadFailed(format!("missing column '{}'", column)))
    };
    Ok((find(CSV_HEADER[0])?, find(CSV_HEADER[1])?))
}

/// Parse CSV text with a header row containing `url` and `description`.
///
/// Every row must have as many fields as the header.
fn parse_entries(text: &str) -> StorageResult<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    column_indices(reader.headers()?)?;

    reader
        .deserialize()
        .map(|row| row.map_err(StorageError::from))
        .collect()
}

/// Parse CSV text, accepting rows with missing or extra fields.
///
/// Missing cells read as empty strings; cells past the header are dropped.
fn parse_entries_lenient(text: &str) -> StorageResult<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let (url, description) = column_indices(reader.headers()?)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.push(Entry::new(
            record.get(url).unwrap_or(""),
            record.get(description).unwrap_or(""),
        ));
    }

    Ok(entries)
}

/// Rewrite the whole table, header first, as UTF-8.
fn write_entries(path: &Path, entries: &[Entry]) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::DirectoryError(e.to_string()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }

    let content = writer
        .into_inner()
        .map_err(|e| StorageError::SaveFailed(e.to_string()))?;

    fs::write(path, content).map_err(|e| StorageError::SaveFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_initialized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("phishing_db.csv");

        let store = EntryStore::open(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "url,description\n");
    }

    #[test]
    fn test_append_dedups_exact_pair() {
        let dir = tempdir().unwrap();
        let store = EntryStore::open(dir.path().join("db.csv")).unwrap();

        assert!(store.append_if_new("http://login.example", "Suspicious URL pattern detected").unwrap());
        assert!(!store.append_if_new("http://login.example", "Suspicious URL pattern detected").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_subject_different_reason_is_distinct() {
        let dir = tempdir().unwrap();
        let store = EntryStore::open(dir.path().join("db.csv")).unwrap();

        assert!(store.append_if_new("verify account", "Suspicious URL pattern detected").unwrap());
        assert!(store.append_if_new("verify account", "Phishing text pattern detected").unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_no_normalization_in_key() {
        let dir = tempdir().unwrap();
        let store = EntryStore::open(dir.path().join("db.csv")).unwrap();

        store.append_if_new("http://Login.example", "r").unwrap();
        assert!(store.append_if_new("http://login.example", "r").unwrap());
        assert!(store.append_if_new("http://login.example ", "r").unwrap());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_append_persists_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let store = EntryStore::open(&path).unwrap();

        store.append_if_new("http://a.example/login", "Suspicious URL pattern detected").unwrap();
        store.append_if_new("act now, urgent, verify", "Phishing text pattern detected").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "url,description\n\
             http://a.example/login,Suspicious URL pattern detected\n\
             \"act now, urgent, verify\",Phishing text pattern detected\n"
        );
    }

    #[test]
    fn test_reopen_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");

        {
            let store = EntryStore::open(&path).unwrap();
            store.append_if_new("c", "r").unwrap();
            store.append_if_new("a", "r").unwrap();
            store.append_if_new("b", "r").unwrap();
        }

        let reopened = EntryStore::open(&path).unwrap();
        let subjects: Vec<_> = reopened.list().into_iter().map(|e| e.subject).collect();
        assert_eq!(subjects, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reload_picks_up_external_edits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let store = EntryStore::open(&path).unwrap();

        fs::write(&path, "url,description\nhttp://x.example,manual\n").unwrap();
        assert!(store.is_empty());

        let entries = store.reload().unwrap();
        assert_eq!(entries, vec![Entry::new("http://x.example", "manual")]);
        assert!(store.contains("http://x.example", "manual"));
    }

    #[test]
    fn test_extra_columns_and_bom_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"url,description,notes\nhttp://x,manual,kept by hand\n");
        fs::write(&path, bytes).unwrap();

        let store = EntryStore::open(&path).unwrap();
        assert_eq!(store.list(), vec![Entry::new("http://x", "manual")]);
    }

    #[test]
    fn test_latin1_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let mut bytes = b"url,description\nhttp://caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b".example,legacy\n");
        fs::write(&path, bytes).unwrap();

        let store = EntryStore::open(&path).unwrap();
        assert_eq!(store.list(), vec![Entry::new("http://café.example", "legacy")]);
    }

    #[test]
    fn test_utf16_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "url,description\nhttp://x,exported\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).unwrap();

        let store = EntryStore::open(&path).unwrap();
        assert_eq!(store.list(), vec![Entry::new("http://x", "exported")]);
    }

    #[test]
    fn test_unparseable_file_loads_empty_and_is_rewritten_on_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        fs::write(&path, "something,else\n1,2\n").unwrap();

        let store = EntryStore::open(&path).unwrap();
        assert!(store.is_empty());
        // Left alone until the next insert.
        assert_eq!(fs::read_to_string(&path).unwrap(), "something,else\n1,2\n");

        store.append_if_new("s", "r").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "url,description\ns,r\n");
    }

    #[test]
    fn test_ragged_rows_survive_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        fs::write(
            &path,
            "url,description\n\
             http://a.example/login,Suspicious URL pattern detected\n\
             http://b.example\n\
             http://d.example/update,Suspicious URL pattern detected,stray\n",
        )
        .unwrap();

        let store = EntryStore::open(&path).unwrap();
        assert_eq!(
            store.list(),
            vec![
                Entry::new("http://a.example/login", "Suspicious URL pattern detected"),
                Entry::new("http://b.example", ""),
                Entry::new("http://d.example/update", "Suspicious URL pattern detected"),
            ]
        );

        store
            .append_if_new("http://c.example/verify", "Suspicious URL pattern detected")
            .unwrap();

        let reopened = EntryStore::open(&path).unwrap();
        let subjects: Vec<_> = reopened.list().into_iter().map(|e| e.subject).collect();
        assert_eq!(
            subjects,
            vec![
                "http://a.example/login",
                "http://b.example",
                "http://d.example/update",
                "http://c.example/verify",
            ]
        );
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.csv");
        let store = EntryStore::open(&path).unwrap();

        // Replace the file with a directory so the rewrite fails.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = store.append_if_new("s", "r").unwrap_err();
        assert!(matches!(err, StorageError::SaveFailed(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_entry_serializes_with_column_names() {
        let json = serde_json::to_string(&Entry::new("u", "d")).unwrap();
        assert_eq!(json, r#"{"url":"u","description":"d"}"#);
    }
}
