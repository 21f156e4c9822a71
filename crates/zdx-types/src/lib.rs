//! Shared reply types for zdx crates.

use serde::{Deserialize, Serialize};

/// A single inline button with a label and callback data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: data.into(),
        }
    }
}

/// A row of inline buttons, rendered left to right.
pub type InlineButtonRow = Vec<InlineButton>;

/// One outgoing reply produced by the agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    /// Send audio as a voice message (bubble) instead of an audio file.
    #[serde(default, skip_serializing_if = "is_false")]
    pub audio_as_voice: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_error: bool,
    /// Inline buttons attached to this payload, top to bottom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<InlineButtonRow>>,
}

impl ReplyPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Returns true when the payload has something worth sending.
    pub fn has_content(&self) -> bool {
        let has_text = self.text.as_deref().is_some_and(|text| !text.trim().is_empty());
        let has_media = self.media_url.is_some()
            || self.media_urls.as_ref().is_some_and(|urls| !urls.is_empty());
        let has_buttons = self.buttons.as_ref().is_some_and(|rows| !rows.is_empty());
        has_text || has_media || has_buttons
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
