//! # Inspect Subcommand
//!
//! Debugging view of the hashing pipeline: every padded block printed byte
//! by byte in binary, followed by that block's 64 schedule words, each
//! shown as four space-separated binary bytes.

use clap::Args;
use sha256_core::{
    compress, message_schedule, HashState, PaddedMessage, Schedule, Sha256Digest, BLOCK_LEN, IV,
};

use crate::input::InputArgs;

/// Bytes printed per line in the block dump.
const BYTES_PER_LINE: usize = 8;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// One block and its expanded schedule.
#[derive(Debug, Clone)]
pub struct BlockDump {
    pub block: [u8; BLOCK_LEN],
    pub schedule: Schedule,
}

/// Padded buffer, per-block schedules and the resulting digest.
#[derive(Debug, Clone)]
pub struct InspectReport {
    pub input_len: usize,
    pub blocks: Vec<BlockDump>,
    pub digest: Sha256Digest,
}

/// `01100001`
pub fn byte_binary(byte: u8) -> String {
    format!("{byte:08b}")
}

/// `01100001 01100010 01100011 10000000`
pub fn word_binary(word: u32) -> String {
    word.to_be_bytes()
        .iter()
        .map(|&b| byte_binary(b))
        .collect::<Vec<_>>()
        .join(" ")
}

impl InspectReport {
    /// Render the dump for terminal output.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "message: {} bytes, {} block(s)\n",
            self.input_len,
            self.blocks.len()
        );

        for (index, dump) in self.blocks.iter().enumerate() {
            out.push_str(&format!("\nblock {index}:\n"));
            for line in dump.block.chunks(BYTES_PER_LINE) {
                let bytes: Vec<String> = line.iter().map(|&b| byte_binary(b)).collect();
                out.push_str(&format!("  {}\n", bytes.join(" ")));
            }

            out.push_str(&format!("schedule {index}:\n"));
            for (i, &word) in dump.schedule.iter().enumerate() {
                out.push_str(&format!("  w[{i:02}] {}\n", word_binary(word)));
            }
        }

        out.push_str(&format!("\ndigest: {}\n", self.digest));
        out
    }
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<InspectReport> {
    let message = args.input.read()?;
    let padded = PaddedMessage::new(&message)?;
    tracing::debug!(
        input_len = message.len(),
        padded_len = padded.len(),
        blocks = padded.block_count(),
        "padded message"
    );

    let mut state: HashState = IV;
    let mut blocks = Vec::with_capacity(padded.block_count());
    for block in padded.blocks() {
        let schedule = message_schedule(&block);
        compress(&mut state, &schedule);
        blocks.push(BlockDump { block, schedule });
    }

    Ok(InspectReport {
        input_len: message.len(),
        blocks,
        digest: Sha256Digest::from_state(&state),
    })
}
