//! # Hash Subcommand
//!
//! Hashes the message, optionally hashes the digest bytes a second time,
//! and optionally reports how long hashing took.

use std::time::Instant;

use clap::Args;
use serde::Serialize;
use sha256_core::{sha256, Sha256Digest};

use crate::input::InputArgs;

/// Arguments for the hash subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also hash the 32 digest bytes again (hash-of-hash).
    #[arg(long)]
    pub double: bool,

    /// Report the execution time of the hashing step.
    #[arg(long)]
    pub time: bool,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Result of a hash run.
#[derive(Debug, Clone, Serialize)]
pub struct HashReport {
    /// Message length in bytes.
    pub input_len: usize,
    /// Digest of the message.
    pub digest: Sha256Digest,
    /// Digest of `digest`'s raw bytes, when `--double` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_digest: Option<Sha256Digest>,
    /// Wall-clock hashing time, when `--time` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

impl HashReport {
    /// Render the report for terminal output.
    pub fn render_text(&self) -> String {
        let mut out = format!("digest: {}\n", self.digest);
        if let Some(double) = &self.double_digest {
            out.push_str(&format!("double digest: {double}\n"));
        }
        if let Some(ms) = self.elapsed_ms {
            out.push_str(&format!("execution time: {ms:.3} ms\n"));
        }
        out
    }
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> anyhow::Result<HashReport> {
    let message = args.input.read()?;
    tracing::debug!(input_len = message.len(), "hashing message");

    let start = Instant::now();
    let digest = sha256(&message)?;
    let double_digest = if args.double {
        Some(sha256(digest.as_bytes())?)
    } else {
        None
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(%digest, elapsed_ms, "hash computed");

    Ok(HashReport {
        input_len: message.len(),
        digest,
        double_digest,
        elapsed_ms: args.time.then_some(elapsed_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(input: &str) -> HashArgs {
        HashArgs {
            input: InputArgs {
                input: Some(input.to_string()),
                file: None,
            },
            ..HashArgs::default()
        }
    }

    #[test]
    fn test_hash_abc() {
        let report = run_hash(&args_for("abc")).unwrap();
        assert_eq!(report.input_len, 3);
        assert_eq!(
            report.digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(report.double_digest.is_none());
        assert!(report.elapsed_ms.is_none());
    }

    #[test]
    fn test_double_hash_default_input() {
        let args = HashArgs {
            double: true,
            ..HashArgs::default()
        };
        let report = run_hash(&args).unwrap();
        assert_eq!(
            report.digest.to_hex(),
            "18d0e7e10ee48e7b0bcfef80f0711df9822c78fc098ef7ace5dc9290e73c6fc5"
        );
        assert_eq!(
            report.double_digest.unwrap().to_hex(),
            "214d44942de22b965668c7bb6c45928781aefe21e4ecdaa34f10da776ee91c2d"
        );
    }

    #[test]
    fn test_timing_reported_only_when_requested() {
        let args = HashArgs {
            time: true,
            ..args_for("abc")
        };
        let report = run_hash(&args).unwrap();
        assert!(report.elapsed_ms.unwrap() >= 0.0);
        assert!(report.render_text().contains("execution time:"));
    }

    #[test]
    fn test_json_omits_unrequested_fields() {
        let report = run_hash(&args_for("")).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["digest"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(json["input_len"], 0);
        assert!(json.get("double_digest").is_none());
        assert!(json.get("elapsed_ms").is_none());
    }
}
