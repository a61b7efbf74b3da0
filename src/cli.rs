//! Command-line options and one-shot mode.
//!
//! Without arguments the interactive checker starts. Given a text (or
//! `--stdin`), the text is checked once and the report is printed.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::render::{render_html, render_json, render_text};
use crate::scan::evaluate;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Check a pasted link or message for common phishing signs", long_about = None)]
pub struct Cli {
    /// Text to check once; omit to start the interactive checker
    pub text: Option<String>,

    /// Read the text to check from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Open the interactive checker with TEXT already filled in
    #[arg(short, long, requires = "text")]
    pub interactive: bool,

    /// Report format for one-shot mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the (escaped) checked text in HTML output
    #[arg(long)]
    pub echo_input: bool,

    /// Directory for log files (default: logs/ next to the executable)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// What the binary should do, resolved from the flags.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    Interactive { initial_text: Option<&'a str> },
    FromArg(&'a str),
    FromStdin,
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        match (&self.text, self.stdin, self.interactive) {
            (_, true, _) => Mode::FromStdin,
            (Some(text), false, true) => Mode::Interactive { initial_text: Some(text.as_str()) },
            (Some(text), false, false) => Mode::FromArg(text.as_str()),
            (None, false, _) => Mode::Interactive { initial_text: None },
        }
    }
}

/// Check `text` once and write the report in the requested format.
pub fn run_once(text: &str, format: OutputFormat, echo_input: bool, out: &mut impl Write) -> Result<()> {
    let evaluation = evaluate(text);
    tracing::info!(tier = %evaluation.tier, ?format, "One-shot check");

    let report = match format {
        OutputFormat::Text => render_text(&evaluation),
        OutputFormat::Json => render_json(&evaluation)? + "\n",
        OutputFormat::Html => render_html(&evaluation, echo_input.then_some(text)) + "\n",
    };

    out.write_all(report.as_bytes()).context("Failed to write report")?;
    out.flush().context("Failed to flush report")
}

pub fn read_all(reader: &mut impl Read) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(std::iter::once("phishcheck").chain(args.iter().copied())).ok()
    }

    fn report(text: &str, format: OutputFormat, echo: bool) -> String {
        let mut out = Vec::new();
        assert!(run_once(text, format, echo, &mut out).is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.map(|c| c.mode() == Mode::Interactive { initial_text: None }), Some(true));
    }

    #[test]
    fn test_modes() {
        let cli = parse(&["http://1.2.3.4"]);
        assert!(matches!(cli.as_ref().map(Cli::mode), Some(Mode::FromArg("http://1.2.3.4"))));

        let cli = parse(&["--stdin", "--format", "json"]);
        assert!(matches!(cli.as_ref().map(Cli::mode), Some(Mode::FromStdin)));
        assert_eq!(cli.map(|c| c.format), Some(OutputFormat::Json));

        let cli = parse(&["-i", "verify your account"]);
        assert!(matches!(
            cli.as_ref().map(Cli::mode),
            Some(Mode::Interactive { initial_text: Some("verify your account") })
        ));
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        assert!(parse(&["--stdin", "some text"]).is_none());
        assert!(parse(&["--interactive"]).is_none());
        assert!(parse(&["--format", "xml", "text"]).is_none());
    }

    #[test]
    fn test_text_report() {
        let out = report("Enter your otp", OutputFormat::Text, false);
        assert!(out.starts_with("Analysis complete. [Medium Risk]\n"));
    }

    #[test]
    fn test_json_report() {
        let out = report("", OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["tier"], "none");
        assert_eq!(value["reasons"][0]["code"], "empty_input");
    }

    #[test]
    fn test_html_report_echoes_escaped_input_only_when_asked() {
        let text = "<b>login immediately</b>";
        assert!(!report(text, OutputFormat::Html, false).contains("checked-input"));

        let out = report(text, OutputFormat::Html, true);
        assert!(out.contains("&lt;b&gt;login immediately&lt;/b&gt;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_read_all() {
        let mut input: &[u8] = b"  Enter your otp\n";
        assert_eq!(read_all(&mut input).unwrap_or_default(), "  Enter your otp\n");
    }
}
