//! Inline button tags in agent output.
//!
//! Agents can ask for tappable buttons by embedding a block in their reply:
//!
//! ```text
//! Pick a size:
//! [[buttons]]
//! [Small|size:s][Large|size:l]
//! [Cancel|cancel]
//! [[/buttons]]
//! ```
//!
//! Each non-blank line inside the block becomes a row and each `[Label|data]`
//! becomes a button. Extraction removes the block from the visible text.
//! Definitions that can't be sent (empty label or data, oversized data) are
//! dropped without failing the whole block.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use zdx_types::{InlineButton, InlineButtonRow};

/// Telegram limits `callback_data` to 64 bytes.
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

// Tag names fold ASCII case only.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:\[\[buttons\]\])\s*([\s\S]*?)\s*(?i-u:\[\[/buttons\]\])")
        .expect("button block pattern is valid")
});

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\[\[buttons\]\]").expect("open tag pattern is valid"));

static CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\[\[/buttons\]\]").expect("close tag pattern is valid"));

static BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]|]+)\|([^\]]+)\]").expect("button definition pattern is valid")
});

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("horizontal space pattern is valid"));

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("newline run pattern is valid"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("excess newline pattern is valid"));

static NEWLINE_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("newline padding pattern is valid"));

/// Limits applied while parsing button definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTagOptions {
    /// Maximum `data` length in UTF-8 bytes.
    pub max_data_bytes: usize,
}

impl Default for ButtonTagOptions {
    fn default() -> Self {
        Self {
            max_data_bytes: MAX_CALLBACK_DATA_BYTES,
        }
    }
}

/// Result of extracting a button block from text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ButtonTagExtraction {
    /// Text with the block removed and whitespace normalized.
    pub cleaned: String,
    /// Parsed rows, `None` when no valid button survived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<InlineButtonRow>>,
    /// Whether a `[[buttons]]...[[/buttons]]` block was found at all.
    pub has_tag: bool,
}

/// Strips button syntax from text that may be a partial chunk.
///
/// Used when buttons were already extracted from the joined text but the
/// individual chunks still carry raw syntax. Tags don't need to be paired.
pub fn strip_button_syntax_fragments(text: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return String::new();
    };

    let text = OPEN_TAG.replace_all(text, "");
    let text = CLOSE_TAG.replace_all(&text, "");
    let text = BUTTON.replace_all(&text, "");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Extracts the first button block using the default limits.
pub fn extract_button_tags(text: Option<&str>) -> ButtonTagExtraction {
    extract_button_tags_with(text, &ButtonTagOptions::default())
}

/// Extracts the first button block from agent output.
///
/// Only the first block is parsed, but every block is removed from
/// `cleaned`. Without a complete block the text is returned verbatim.
pub fn extract_button_tags_with(
    text: Option<&str>,
    options: &ButtonTagOptions,
) -> ButtonTagExtraction {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return ButtonTagExtraction::default();
    };

    let Some(block) = BLOCK.captures(text).and_then(|caps| caps.get(1)) else {
        return ButtonTagExtraction {
            cleaned: text.to_string(),
            buttons: None,
            has_tag: false,
        };
    };

    let rows = parse_rows(block.as_str(), options);
    tracing::debug!(rows = rows.len(), "extracted button block");

    ButtonTagExtraction {
        cleaned: remove_blocks(text),
        buttons: (!rows.is_empty()).then_some(rows),
        has_tag: true,
    }
}

/// Byte ranges of every complete block in `text`, in order.
pub(crate) fn block_spans(text: &str) -> Vec<Range<usize>> {
    BLOCK.find_iter(text).map(|m| m.range()).collect()
}

fn parse_rows(block: &str, options: &ButtonTagOptions) -> Vec<InlineButtonRow> {
    block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(line, options))
        .filter(|row| !row.is_empty())
        .collect()
}

fn parse_row(line: &str, options: &ButtonTagOptions) -> InlineButtonRow {
    let mut row = Vec::new();
    for caps in BUTTON.captures_iter(line) {
        let label = caps[1].trim();
        let data = caps[2].trim();
        if label.is_empty() || data.is_empty() {
            tracing::trace!(definition = &caps[0], "dropping button with empty label or data");
            continue;
        }
        if data.len() > options.max_data_bytes {
            tracing::trace!(
                label,
                bytes = data.len(),
                limit = options.max_data_bytes,
                "dropping button with oversized data"
            );
            continue;
        }
        row.push(InlineButton::new(label, data));
    }
    row
}

/// Removes every block and normalizes the whitespace left behind.
fn remove_blocks(text: &str) -> String {
    let text: Cow<'_, str> = BLOCK.replace_all(text, "");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    // Keep paragraph breaks, collapse anything longer.
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    let text = NEWLINE_PADDING.replace_all(&text, "\n");
    text.trim().to_string()
}
