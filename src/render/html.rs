//! HTML rendering of the result box.
//!
//! Reason strings are static, but the checked input is user-controlled, so
//! everything that goes into the markup passes through [`escape_html`].

use super::{advice, tier_label, title};
use crate::scan::{Evaluation, RiskTier};

/// Escape text for embedding in HTML content or attribute values.
///
/// ```
/// use phishcheck::render::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tag_class(tier: RiskTier) -> Option<&'static str> {
    match tier {
        RiskTier::None => None,
        RiskTier::Low => Some("tag tag-safe"),
        RiskTier::Medium => Some("tag tag-medium"),
        RiskTier::High => Some("tag tag-danger"),
    }
}

/// Build the result-box markup for an evaluation.
///
/// `checked` is the user's input; when given it is echoed back, escaped.
pub fn render_html(evaluation: &Evaluation, checked: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"result-title\">");
    html.push_str(&escape_html(title(evaluation)));
    if let (Some(class), Some(label)) = (tag_class(evaluation.tier), tier_label(evaluation.tier)) {
        html.push_str(&format!("<span class=\"{}\">{}</span>", class, escape_html(label)));
    }
    html.push_str("</div>");

    if !evaluation.is_empty_input() && !evaluation.reasons.is_empty() {
        html.push_str("<ul class=\"reason-list\">");
        for reason in &evaluation.reasons {
            html.push_str(&format!("<li>{}</li>", escape_html(reason.message())));
        }
        html.push_str("</ul>");
    }

    if let Some(text) = checked.map(str::trim).filter(|t| !t.is_empty()) {
        html.push_str(&format!("<p class=\"checked-input\">{}</p>", escape_html(text)));
    }

    if let Some(text) = advice(evaluation.tier) {
        html.push_str(&format!("<p class=\"helper-text\">{}</p>", escape_html(text)));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::evaluate;

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"say "hi" 'there'"#), "say &quot;hi&quot; &#39;there&#39;");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_high_risk_markup() {
        let evaluation = evaluate("Please verify your account now: http://192.168.1.200");
        let html = render_html(&evaluation, None);
        assert!(html.starts_with(
            "<div class=\"result-title\">Analysis complete.<span class=\"tag tag-danger\">High Risk (Possible Phishing)</span></div>"
        ));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("&#39;http://&#39;"));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn test_low_risk_markup() {
        let html = render_html(&evaluate("hello, just checking in"), None);
        assert!(html.contains("tag tag-safe"));
        assert!(html.contains("<li>No obvious phishing pattern detected"));
        assert!(html.contains("does not guarantee 100% safety"));
    }

    #[test]
    fn test_empty_input_markup_has_title_only() {
        let html = render_html(&evaluate(""), Some("  "));
        assert_eq!(
            html,
            "<div class=\"result-title\">Please paste a URL or message first.</div>"
        );
    }

    #[test]
    fn test_script_input_is_escaped_when_echoed() {
        let input = "<script>alert('otp')</script> http://evil.example";
        let html = render_html(&evaluate(input), Some(input));
        assert!(!html.contains("<script>"));
        assert!(html.contains(
            "<p class=\"checked-input\">&lt;script&gt;alert(&#39;otp&#39;)&lt;/script&gt; http://evil.example</p>"
        ));
    }
}
