//! Attaching parsed button tags to outgoing reply payloads.

use std::ops::Range;

use zdx_types::ReplyPayload;

use crate::button_tags::{
    ButtonTagOptions, block_spans, extract_button_tags_with, strip_button_syntax_fragments,
};

/// Moves a button block from the payload text onto the payload itself.
///
/// Buttons already set on the payload win over parsed ones; the block is
/// still removed from the text. Payloads without a block are returned as-is.
pub fn apply_button_tags(mut payload: ReplyPayload, options: &ButtonTagOptions) -> ReplyPayload {
    let extraction = extract_button_tags_with(payload.text.as_deref(), options);
    if !extraction.has_tag {
        return payload;
    }

    payload.text = non_empty(extraction.cleaned);
    if payload.buttons.is_none() {
        payload.buttons = extraction.buttons;
    } else if extraction.buttons.is_some() {
        tracing::debug!("payload already has buttons, ignoring parsed button block");
    }
    payload
}

/// Finalizes block-streamed replies once the whole turn is known.
///
/// A button block is usually split across several streamed chunks, so it is
/// parsed from the concatenated text. Each chunk loses the part that falls inside
/// a block, then any leftover syntax is stripped. Chunks left empty are
/// dropped and the buttons go on the last remaining chunk (or a buttons-only
/// payload when nothing is left).
pub fn finalize_streamed_replies(
    chunks: Vec<ReplyPayload>,
    options: &ButtonTagOptions,
) -> Vec<ReplyPayload> {
    let joined = chunks
        .iter()
        .filter_map(|chunk| chunk.text.as_deref())
        .collect::<String>();
    let extraction = extract_button_tags_with(Some(&joined), options);
    if !extraction.has_tag {
        return chunks;
    }

    let spans = block_spans(&joined);
    let total = chunks.len();
    let mut offset = 0;
    let mut replies: Vec<ReplyPayload> = chunks
        .into_iter()
        .map(|mut chunk| {
            if let Some(text) = chunk.text.take() {
                let outside = cut_spans(&text, offset, &spans);
                offset += text.len();
                chunk.text = non_empty(strip_button_syntax_fragments(Some(&outside)));
            }
            chunk
        })
        .filter(ReplyPayload::has_content)
        .collect();
    tracing::debug!(
        chunks = total,
        kept = replies.len(),
        has_buttons = extraction.buttons.is_some(),
        "stripped button syntax from streamed replies"
    );

    if let Some(buttons) = extraction.buttons {
        match replies.last_mut() {
            Some(last) if last.buttons.is_none() => last.buttons = Some(buttons),
            Some(_) => {
                tracing::debug!("last reply already has buttons, ignoring parsed button block");
            }
            None => replies.push(ReplyPayload {
                buttons: Some(buttons),
                ..ReplyPayload::default()
            }),
        }
    }

    replies
}

/// Removes the parts of `text` covered by `spans`, where `text` starts at
/// byte `offset` of the concatenated reply and `spans` are sorted and disjoint.
fn cut_spans(text: &str, offset: usize, spans: &[Range<usize>]) -> String {
    let end = offset + text.len();
    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.end <= offset || span.start >= end {
            continue;
        }
        let cut_start = span.start.saturating_sub(offset);
        kept.push_str(&text[cursor..cut_start]);
        cursor = span.end.min(end) - offset;
    }
    kept.push_str(&text[cursor..]);
    kept
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
