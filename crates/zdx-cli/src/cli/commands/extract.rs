//! Button block extraction.

use std::path::Path;

use anyhow::{Result, bail};
use zdx_reply::telegram::SendMessageRequest;
use zdx_reply::{ButtonTagOptions, apply_button_tags, extract_button_tags_with};
use zdx_types::ReplyPayload;

use super::{print_json, read_input};

pub fn run(
    input: Option<&Path>,
    options: &ButtonTagOptions,
    telegram_chat_id: Option<i64>,
    pretty: bool,
) -> Result<()> {
    let text = read_input(input)?;

    let Some(chat_id) = telegram_chat_id else {
        let extraction = extract_button_tags_with(Some(&text), options);
        return print_json(&extraction, pretty);
    };

    let payload = apply_button_tags(ReplyPayload::text(text), options);
    let Some(request) = SendMessageRequest::from_payload(chat_id, &payload) else {
        bail!("reply has no text left to send after removing the button block");
    };
    print_json(&request, pretty)
}
