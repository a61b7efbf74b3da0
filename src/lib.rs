//! PhishCheck - a rule-based checker for suspicious links and messages
//!
//! This library provides:
//! - The heuristic scan that maps pasted text to a risk tier and reasons
//! - Rendering of scan results as HTML, plain text and JSON
//! - An interactive terminal checker (input box, result box, clipboard paste)
//!
//! The rules are a demonstration of common phishing signs, not a real
//! classifier: no reputation lookups, no network access, no scoring model.
//!
//! # Example
//!
//! ```
//! use phishcheck::scan::{evaluate, Reason, RiskTier};
//!
//! let result = evaluate("Your account will be blocked! Login immediately: http://10.0.0.7");
//! assert_eq!(result.tier, RiskTier::High);
//! assert_eq!(
//!     result.reasons,
//!     vec![Reason::UrgentLanguage, Reason::InsecureTransport, Reason::RawIpHost]
//! );
//! ```

pub mod app;
pub mod cli;
pub mod event;
pub mod render;
pub mod scan;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use scan::{evaluate, Evaluation, Reason, RiskTier};
