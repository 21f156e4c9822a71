//! Reply formatting for zdx chat surfaces.
//!
//! Agent replies may carry an inline `[[buttons]]` block. This crate parses
//! that block into button rows, cleans it out of the visible text and maps
//! the result onto outgoing payloads and Telegram request bodies.

pub mod button_tags;
pub mod config;
pub mod payload;
pub mod telegram;

pub use button_tags::{
    ButtonTagExtraction, ButtonTagOptions, MAX_CALLBACK_DATA_BYTES, extract_button_tags,
    extract_button_tags_with, strip_button_syntax_fragments,
};
pub use payload::{apply_button_tags, finalize_streamed_replies};
