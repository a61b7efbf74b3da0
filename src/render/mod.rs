//! Presentation of scan results.
//!
//! The scan itself only returns structured data. This module maps it to the
//! texts shown to the user: title, tier label, advice, and the reason list,
//! rendered either as HTML markup, plain text, or JSON.

mod html;

pub use html::{escape_html, render_html};

use anyhow::{Context, Result};

use crate::scan::{Evaluation, RiskTier};

/// Headline for a result box.
pub fn title(evaluation: &Evaluation) -> &'static str {
    if evaluation.is_empty_input() {
        "Please paste a URL or message first."
    } else {
        "Analysis complete."
    }
}

/// Short tag shown next to the title. Empty input has no tag.
pub fn tier_label(tier: RiskTier) -> Option<&'static str> {
    match tier {
        RiskTier::None => None,
        RiskTier::Low => Some("Low Risk"),
        RiskTier::Medium => Some("Medium Risk"),
        RiskTier::High => Some("High Risk (Possible Phishing)"),
    }
}

/// Follow-up advice for a tier.
pub fn advice(tier: RiskTier) -> Option<&'static str> {
    match tier {
        RiskTier::None => None,
        RiskTier::Low => Some(
            "This still does not guarantee 100% safety. Always double check the sender and website address.",
        ),
        RiskTier::Medium | RiskTier::High => Some(
            "Suggestion: Do not click unknown links, do not share OTP/password, and verify from the official website or app.",
        ),
    }
}

/// Plain-text report, one reason per line.
///
/// ```
/// use phishcheck::render::render_text;
/// use phishcheck::scan::evaluate;
///
/// let report = render_text(&evaluate("Enter your otp"));
/// assert!(report.starts_with("Analysis complete. [Medium Risk]"));
/// ```
pub fn render_text(evaluation: &Evaluation) -> String {
    let mut out = String::from(title(evaluation));
    if let Some(label) = tier_label(evaluation.tier) {
        out.push_str(&format!(" [{}]", label));
    }
    out.push('\n');

    // The empty-input advisory is already the title.
    if !evaluation.is_empty_input() {
        for reason in &evaluation.reasons {
            out.push_str(&format!("  - {}\n", reason));
        }
    }

    if let Some(text) = advice(evaluation.tier) {
        out.push_str(text);
        out.push('\n');
    }
    out
}

pub fn render_json(evaluation: &Evaluation) -> Result<String> {
    serde_json::to_string_pretty(evaluation).context("Failed to serialize evaluation")
}
