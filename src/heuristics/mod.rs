//! Lexical phishing heuristics.
//!
//! Both classifiers are pure functions over a single string: no network
//! access, no learned state. They deliberately stay at the level of
//! substring and regex matching.

pub mod text;
pub mod url;

pub use text::{classify_text, matched_phrases, PHISHING_PHRASES, TEXT_MATCH_THRESHOLD};
pub use url::{classify_url, matched_url_signal, UrlSignal, URL_KEYWORDS};
