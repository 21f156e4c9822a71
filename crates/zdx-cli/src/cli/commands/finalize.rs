//! Finalizing block-streamed replies.

use std::path::Path;

use anyhow::{Context, Result};
use zdx_reply::{ButtonTagOptions, finalize_streamed_replies};
use zdx_types::ReplyPayload;

use super::{print_json, read_input};

pub fn run(input: Option<&Path>, options: &ButtonTagOptions, pretty: bool) -> Result<()> {
    let raw = read_input(input)?;
    let chunks: Vec<ReplyPayload> =
        serde_json::from_str(&raw).context("Failed to parse reply chunks (expected a JSON array)")?;

    let replies = finalize_streamed_replies(chunks, options);
    print_json(&replies, pretty)
}
