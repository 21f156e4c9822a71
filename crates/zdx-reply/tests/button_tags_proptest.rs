//! Property-based tests for button tag extraction and fragment stripping.

use proptest::prelude::*;
use zdx_reply::{extract_button_tags, strip_button_syntax_fragments};

/// Plain prose: no brackets, so no tags or button definitions.
fn prose_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?\t\n]{0,80}"
}

/// Text mixing filler with tag and definition fragments.
///
/// Letters only appear inside bracketed pieces, so removing one fragment
/// can't spell a tag name out of its neighbours (`[[but[[/buttons]]tons]]`).
fn noisy_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[0-9 .,\n]{1,12}",
            Just("[[buttons]]".to_string()),
            Just("[[/BUTTONS]]".to_string()),
            Just("\n\n\n".to_string()),
            "\\[[a-zA-Z ]{0,6}\\|[a-z0-9:_ ]{0,8}\\]",
            "\\[[a-zA-Z ]{1,6}\\]",
            Just("[".to_string()),
            Just("]".to_string()),
            Just("|".to_string()),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

fn button_line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-zA-Z]{1,8}", "[a-z0-9:_]{1,16}"), 1..4).prop_map(|buttons| {
        buttons
            .into_iter()
            .map(|(label, data)| format!("[{label}|{data}]"))
            .collect::<String>()
    })
}

proptest! {
    /// Idempotent unless a removed fragment joins the halves of a tag.
    #[test]
    fn test_strip_is_idempotent(text in noisy_strategy()) {
        let once = strip_button_syntax_fragments(Some(&text));
        let twice = strip_button_syntax_fragments(Some(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_plain_text_only_trims_and_collapses(text in prose_strategy()) {
        let stripped = strip_button_syntax_fragments(Some(&text));
        let mut expected = text.trim().to_string();
        while expected.contains("\n\n") {
            expected = expected.replace("\n\n", "\n");
        }
        prop_assert_eq!(stripped, expected);
    }

    #[test]
    fn test_extract_without_block_is_verbatim(text in prose_strategy()) {
        let result = extract_button_tags(Some(&text));
        prop_assert!(!result.has_tag);
        prop_assert!(result.buttons.is_none());
        prop_assert_eq!(result.cleaned, text);
    }

    #[test]
    fn test_extract_single_block_round_trip(
        before in prose_strategy(),
        lines in prop::collection::vec(button_line_strategy(), 1..4),
        after in prose_strategy(),
    ) {
        let text = format!("{before}\n[[buttons]]\n{}\n[[/buttons]]\n{after}", lines.join("\n"));

        let result = extract_button_tags(Some(&text));
        prop_assert!(result.has_tag);
        let rows = result.buttons.clone().unwrap_or_default();
        prop_assert_eq!(rows.len(), lines.len());

        let again = extract_button_tags(Some(&result.cleaned));
        prop_assert!(!again.has_tag);
        prop_assert!(again.buttons.is_none());
    }
}
