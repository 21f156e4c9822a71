//! Fragment stripping for partial reply chunks.

use std::path::Path;

use anyhow::Result;
use zdx_reply::strip_button_syntax_fragments;

use super::read_input;

pub fn run(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    println!("{}", strip_button_syntax_fragments(Some(&text)));
    Ok(())
}
