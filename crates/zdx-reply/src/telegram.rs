//! Telegram Bot API request bodies for replies with inline buttons.

use serde::Serialize;
use zdx_types::{InlineButton, InlineButtonRow, ReplyPayload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton<'a> {
    pub text: &'a str,
    pub callback_data: &'a str,
}

impl<'a> From<&'a InlineButton> for InlineKeyboardButton<'a> {
    fn from(button: &'a InlineButton) -> Self {
        Self {
            text: &button.text,
            callback_data: &button.data,
        }
    }
}

/// `reply_markup` for a message with an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup<'a> {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>>,
}

impl<'a> InlineKeyboardMarkup<'a> {
    /// Builds the keyboard, skipping empty rows. `None` when nothing is left.
    pub fn from_rows(rows: &'a [InlineButtonRow]) -> Option<Self> {
        let inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>> = rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.iter().map(InlineKeyboardButton::from).collect())
            .collect();
        (!inline_keyboard.is_empty()).then_some(Self { inline_keyboard })
    }
}

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup<'a>>,
}

impl<'a> SendMessageRequest<'a> {
    /// Builds a `sendMessage` body from a reply payload.
    ///
    /// Telegram needs non-empty text, so payloads without text yield `None`.
    /// `reply_to_id` is only used when it is a numeric message id.
    pub fn from_payload(chat_id: i64, payload: &'a ReplyPayload) -> Option<Self> {
        let text = payload.text.as_deref().map(str::trim).filter(|text| !text.is_empty())?;
        let reply_to_message_id = payload
            .reply_to_id
            .as_deref()
            .and_then(|id| id.trim().parse::<i64>().ok());
        let reply_markup = payload
            .buttons
            .as_deref()
            .and_then(InlineKeyboardMarkup::from_rows);

        Some(Self {
            chat_id,
            text,
            reply_to_message_id,
            allow_sending_without_reply: reply_to_message_id.map(|_| true),
            reply_markup,
        })
    }
}
