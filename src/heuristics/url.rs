//! URL heuristic.
//!
//! Flags a URL when it embeds something shaped like a dotted IPv4 literal,
//! or when any of a small set of credential-lure keywords appears anywhere
//! in it (case-insensitive).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Keywords that mark a URL as suspicious when present as substrings.
pub const URL_KEYWORDS: [&str; 5] = ["login", "secure", "update", "account", "verify"];

/// Four dot-separated groups of one to three digits, word-bounded.
static IP_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,3}(?:\.\d{1,3}){3}\b").expect("IPv4 literal pattern is valid")
});

/// The rule that caused a URL to be flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSignal {
    /// An IPv4-literal-shaped substring, as it appeared in the URL.
    IpLiteral(String),
    /// A keyword from [`URL_KEYWORDS`].
    Keyword(&'static str),
}

impl fmt::Display for UrlSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IpLiteral(ip) => write!(f, "IP literal {}", ip),
            Self::Keyword(keyword) => write!(f, "keyword \"{}\"", keyword),
        }
    }
}

/// Return the first rule that flags `url`, checking the IP shape before keywords.
pub fn matched_url_signal(url: &str) -> Option<UrlSignal> {
    if let Some(m) = IP_LITERAL.find(url) {
        return Some(UrlSignal::IpLiteral(m.as_str().to_string()));
    }

    let lowered = url.to_lowercase();
    URL_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
        .map(UrlSignal::Keyword)
}

/// Classify a URL as suspicious (`true`) or not.
pub fn classify_url(url: &str) -> bool {
    matched_url_signal(url).is_some()
}
