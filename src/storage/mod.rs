//! Report persistence.
//!
//! Provides the CSV-backed, deduplicated log of suspicious entries.

mod csv_store;
mod decode;

pub use csv_store::{Entry, EntryStore, CSV_HEADER};
pub use decode::{Decoding, DECODE_CHAIN, LENIENT_DECODING};
