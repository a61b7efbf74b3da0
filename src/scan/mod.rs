//! Heuristic phishing scan.
//!
//! This module inspects pasted text (a URL or a message) for a fixed set of
//! superficial phishing indicators and classifies the result into a risk tier.
//! It is a demonstration rule set, not a real classifier: every check is a
//! plain substring or regex test, and the tier only depends on how many of
//! them matched.

mod evaluator;
mod rules;

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub use evaluator::evaluate;

/// Aggregate phishing-likelihood classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Nothing to judge: the input was empty.
    None,
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Map the number of matched heuristics to a tier.
    ///
    /// ```
    /// use phishcheck::scan::RiskTier;
    ///
    /// assert_eq!(RiskTier::from_match_count(0), RiskTier::Low);
    /// assert_eq!(RiskTier::from_match_count(2), RiskTier::Medium);
    /// assert_eq!(RiskTier::from_match_count(3), RiskTier::High);
    /// ```
    pub fn from_match_count(count: usize) -> Self {
        match count {
            0 => RiskTier::Low,
            1..=2 => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::None => "none",
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explanation attached to an [`Evaluation`].
///
/// The first five variants correspond to the heuristic checks, in the order
/// they run. `NoPatternFound` and `EmptyInput` are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    UrgentLanguage,
    SensitiveDataRequest,
    InsecureTransport,
    HyphenatedDomain,
    RawIpHost,
    NoPatternFound,
    EmptyInput,
}

impl Reason {
    /// Stable machine-readable identifier.
    pub fn code(self) -> &'static str {
        match self {
            Reason::UrgentLanguage => "urgent_language",
            Reason::SensitiveDataRequest => "sensitive_data_request",
            Reason::InsecureTransport => "insecure_transport",
            Reason::HyphenatedDomain => "hyphenated_domain",
            Reason::RawIpHost => "raw_ip_host",
            Reason::NoPatternFound => "no_pattern_found",
            Reason::EmptyInput => "empty_input",
        }
    }

    /// Human-readable explanation shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Reason::UrgentLanguage => {
                "Message is using urgent language (account will be blocked / verify now)."
            }
            Reason::SensitiveDataRequest => {
                "Asking for sensitive information like password, OTP, PIN or CVV."
            }
            Reason::InsecureTransport => "Link is using 'http://' instead of secure 'https://'.",
            Reason::HyphenatedDomain => "URL contains many '-' characters, looks suspicious.",
            Reason::RawIpHost => "URL seems to use a raw IP address instead of normal domain.",
            Reason::NoPatternFound => {
                "No obvious phishing pattern detected, but user should still be careful."
            }
            Reason::EmptyInput => "Please paste a URL or message first.",
        }
    }

    /// Whether this reason comes from a matched heuristic (as opposed to an advisory).
    pub fn is_heuristic(self) -> bool {
        !matches!(self, Reason::NoPatternFound | Reason::EmptyInput)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reason", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// Outcome of a single [`evaluate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub tier: RiskTier,
    /// Matched reasons in check order, or a single advisory reason.
    pub reasons: Vec<Reason>,
}

impl Evaluation {
    /// Iterate over the reasons that come from matched heuristics.
    pub fn matched(&self) -> impl Iterator<Item = Reason> + '_ {
        self.reasons.iter().copied().filter(|r| r.is_heuristic())
    }

    pub fn is_empty_input(&self) -> bool {
        self.tier == RiskTier::None
    }
}
