//! Mapping of free-form model output onto [`ScriptSection`].
//!
//! Models do not always honour "return only JSON". Recovery runs in three
//! steps: strict decode of the whole text, then decode of the span from the
//! first `{` to the last `}`, then the degraded single-field section.

use serde_json::{Map, Value};

use crate::types::ScriptSection;

/// Parse a model response. Total: every input yields a section.
pub fn parse_script(raw_text: &str) -> ScriptSection {
    let object = decode_object(raw_text.trim())
        .or_else(|| extract_object_span(raw_text).and_then(decode_object));

    match object {
        Some(object) => sections_from_object(&object),
        None => {
            tracing::warn!(
                len = raw_text.len(),
                "No JSON object in model response, keeping raw text as main action"
            );
            ScriptSection::degraded(raw_text)
        }
    }
}

/// Span from the first `{` through the last `}`.
///
/// Greedy: the last closing brace wins, so nested objects and arrays stay
/// inside one enclosing span.
pub fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn decode_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

fn sections_from_object(object: &Map<String, Value>) -> ScriptSection {
    let field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    ScriptSection {
        hook: field("hook"),
        main_action: field("mainAction"),
        finale: field("finale"),
        on_screen_text: field("onScreenText"),
        voiceover: field("voiceover"),
        sounds: field("sounds"),
    }
}
