//! # Message Input
//!
//! Shared `INPUT` / `--file` arguments. The message is either the UTF-8
//! bytes of a string argument or the raw contents of a file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

/// Message hashed when neither a string nor a file is given.
pub const DEFAULT_INPUT: &str = "TestString@123";

/// Where the message comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// String to hash (defaults to "TestString@123").
    #[arg(conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the message from a file instead of the INPUT argument.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Load the message bytes.
    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        if let Some(path) = &self.file {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?;
            tracing::debug!(path = %path.display(), len = bytes.len(), "read input file");
            return Ok(bytes);
        }

        let text = self.input.as_deref().unwrap_or(DEFAULT_INPUT);
        Ok(text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let args = InputArgs::default();
        assert_eq!(args.read().unwrap(), DEFAULT_INPUT.as_bytes());
    }

    #[test]
    fn test_string_input() {
        let args = InputArgs {
            input: Some("abc".to_string()),
            file: None,
        };
        assert_eq!(args.read().unwrap(), b"abc");
    }

    #[test]
    fn test_file_input() {
        let path = std::env::temp_dir().join(format!("sha256-cli-input-{}.bin", std::process::id()));
        std::fs::write(&path, [0u8, 1, 2, 255]).unwrap();
        let args = InputArgs {
            input: None,
            file: Some(path.clone()),
        };
        let bytes = args.read().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bytes, vec![0u8, 1, 2, 255]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let args = InputArgs {
            input: None,
            file: Some(PathBuf::from("/nonexistent/sha256-cli/input.bin")),
        };
        let err = args.read().unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/sha256-cli/input.bin"));
    }
}
