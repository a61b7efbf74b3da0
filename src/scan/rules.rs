//! The individual heuristic checks.
//!
//! Each check is independent and looks at the same [`Subject`]. Keyword
//! checks use the lower-cased text, pattern checks use the trimmed raw text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Reason;

const URGENT_PHRASES: &[&str] = &[
    "verify your account",
    "your account will be blocked",
    "suspend your account",
    "login immediately",
    "click here to verify",
];

// Plain substrings: "pin" also matches inside "shopping".
const SENSITIVE_KEYWORDS: &[&str] = &["share your password", "otp", "pin", "cvv"];

const HYPHEN_THRESHOLD: usize = 3;

#[allow(clippy::expect_used)]
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[a-z0-9.\-]+").expect("valid URL pattern"));

// ASCII digits and ASCII word boundaries; octets are not range-checked.
#[allow(clippy::expect_used)]
static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{1,3}(?:\.[0-9]{1,3}){3}(?-u:\b)").expect("valid IPv4 pattern")
});

/// Text under inspection, prepared once per evaluation.
pub(super) struct Subject<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> Subject<'a> {
    /// `raw` must already be trimmed.
    pub(super) fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }
}

pub(super) type Check = fn(&Subject<'_>) -> bool;

/// All checks in the order they run and report.
pub(super) const CHECKS: [(Reason, Check); 5] = [
    (Reason::UrgentLanguage, urgent_language),
    (Reason::SensitiveDataRequest, sensitive_data_request),
    (Reason::InsecureTransport, insecure_transport),
    (Reason::HyphenatedDomain, hyphenated_domain),
    (Reason::RawIpHost, raw_ip_host),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn urgent_language(subject: &Subject<'_>) -> bool {
    contains_any(&subject.lower, URGENT_PHRASES)
}

fn sensitive_data_request(subject: &Subject<'_>) -> bool {
    contains_any(&subject.lower, SENSITIVE_KEYWORDS)
}

fn insecure_transport(subject: &Subject<'_>) -> bool {
    subject.lower.contains("http://") && !subject.lower.contains("https://")
}

/// A URL is present and the whole text (not just the URL) has many hyphens.
fn hyphenated_domain(subject: &Subject<'_>) -> bool {
    URL_PATTERN.is_match(subject.raw) && subject.raw.matches('-').count() >= HYPHEN_THRESHOLD
}

fn raw_ip_host(subject: &Subject<'_>) -> bool {
    DOTTED_QUAD.is_match(subject.raw)
}
