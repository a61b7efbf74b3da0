use super::rules::{CHECKS, Subject};
use super::{Evaluation, Reason, RiskTier};

/// Evaluate pasted text against every heuristic and classify the risk.
///
/// # Rules
/// - Empty or whitespace-only input: tier `None` with a single advisory reason
/// - Every check runs, no short-circuiting; matches are reported in check order
/// - 0 matches: `Low` plus a catch-all reason, 1-2: `Medium`, 3 or more: `High`
///
/// # Examples
/// ```
/// use phishcheck::scan::{evaluate, Reason, RiskTier};
///
/// let result = evaluate("go to http://my-bank-secure-login-verify.com");
/// assert_eq!(result.tier, RiskTier::Medium);
/// assert_eq!(result.reasons, vec![Reason::InsecureTransport, Reason::HyphenatedDomain]);
/// ```
pub fn evaluate(text: &str) -> Evaluation {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Evaluation {
            tier: RiskTier::None,
            reasons: vec![Reason::EmptyInput],
        };
    }

    let subject = Subject::new(trimmed);
    let mut reasons: Vec<Reason> = CHECKS
        .iter()
        .filter(|(_, check)| check(&subject))
        .map(|(reason, _)| *reason)
        .collect();

    let matched = reasons.len();
    let tier = RiskTier::from_match_count(matched);
    if matched == 0 {
        reasons.push(Reason::NoPatternFound);
    }

    tracing::debug!(%tier, matched, "evaluated input");

    Evaluation { tier, reasons }
}
