//! # Verify Subcommand
//!
//! Hashes the message and compares the digest against an expected hex
//! literal. The binary exits non-zero when they differ.

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use sha256_core::{sha256, Sha256Digest};

use crate::input::InputArgs;

/// Arguments for the verify subcommand.
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expected digest as 64 hex characters.
    #[arg(long, value_name = "HEX")]
    pub expected: String,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of comparing a computed digest with the expected one.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub expected: Sha256Digest,
    pub generated: Sha256Digest,
    pub matches: bool,
}

impl VerifyReport {
    /// Render the report for terminal output.
    pub fn render_text(&self) -> String {
        format!(
            "expected hash: {}\ngenerated hash: {}\nmatches: {}\n",
            self.expected, self.generated, self.matches
        )
    }
}

/// Execute the verify subcommand.
///
/// A mismatch is a normal outcome reported through `matches`; only a
/// malformed expected digest or unreadable input is an error.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<VerifyReport> {
    let expected = Sha256Digest::from_hex(args.expected.trim())
        .with_context(|| format!("invalid expected digest {:?}", args.expected))?;
    let message = args.input.read()?;
    let generated = sha256(&message)?;
    let matches = generated == expected;

    if matches {
        tracing::info!(%generated, "digest matches");
    } else {
        tracing::warn!(%expected, %generated, "digest mismatch");
    }

    Ok(VerifyReport {
        expected,
        generated,
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_HEX: &str = "18d0e7e10ee48e7b0bcfef80f0711df9822c78fc098ef7ace5dc9290e73c6fc5";

    fn verify_args(input: Option<&str>, expected: &str) -> VerifyArgs {
        VerifyArgs {
            input: InputArgs {
                input: input.map(str::to_string),
                file: None,
            },
            expected: expected.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_default_input_matches_demo_digest() {
        let report = run_verify(&verify_args(None, DEMO_HEX)).unwrap();
        assert!(report.matches);
        assert_eq!(
            report.render_text(),
            format!("expected hash: {DEMO_HEX}\ngenerated hash: {DEMO_HEX}\nmatches: true\n")
        );
    }

    #[test]
    fn test_uppercase_expected_matches() {
        let report = run_verify(&verify_args(None, &DEMO_HEX.to_uppercase())).unwrap();
        assert!(report.matches);
    }

    #[test]
    fn test_mismatch_is_reported_not_raised() {
        let report = run_verify(&verify_args(Some("abc"), DEMO_HEX)).unwrap();
        assert!(!report.matches);
        assert!(report.render_text().ends_with("matches: false\n"));
    }

    #[test]
    fn test_malformed_expected_is_error() {
        let err = run_verify(&verify_args(None, "not-a-digest")).unwrap_err();
        assert!(format!("{err:#}").contains("invalid hex digest length"));
    }
}
