//! CLI command handlers.

use std::io::Read;
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use serde::Serialize;

pub mod config;
pub mod extract;
pub mod finalize;
pub mod strip;

/// Reads the whole input from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let json = json.context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
