use serde_json::Value;

/// Result of decoding untrusted model text. `Batch` is the only accepted
/// shape: a JSON array with at least one element. Records inside the array
/// are passed through as-is; field-level validation is deliberately not
/// performed, since the rendering side treats every field as optional.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Batch(Vec<Value>),
    /// Parsed, but not a non-empty array (object, scalar, empty array).
    WrongShape,
    /// Not decodable as JSON at all.
    Unparseable,
}

/// Picks the JSON candidate out of raw model text, in strict priority
/// order: interior of a ```json fence, else interior of any fence, else
/// the whole text.
pub fn extract_payload(text: &str) -> &str {
    if let Some(inner) = fenced_interior(text, "```json") {
        return inner;
    }
    if let Some(inner) = fenced_interior(text, "```") {
        return inner;
    }
    text.trim()
}

fn fenced_interior<'a>(text: &'a str, opener: &str) -> Option<&'a str> {
    let start = text.find(opener)? + opener.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

/// The single shape authority for all three endpoints.
pub fn decode_batch(text: &str) -> Decoded {
    let payload = extract_payload(text);
    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) if !items.is_empty() => Decoded::Batch(items),
        Ok(_) => Decoded::WrongShape,
        Err(_) => Decoded::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ARRAY: &str = r#"[{"method": "Pet Portraits", "icon": "🎨"}]"#;

    #[test]
    fn extracts_tagged_fence() {
        let text = format!("Here you go:\n```json\n{ARRAY}\n```\nEnjoy!");
        assert_eq!(extract_payload(&text), ARRAY);
    }

    #[test]
    fn extracts_untagged_fence() {
        let text = format!("```\n{ARRAY}\n```");
        assert_eq!(extract_payload(&text), ARRAY);
    }

    #[test]
    fn bare_text_passes_through() {
        let text = format!("  {ARRAY}\n");
        assert_eq!(extract_payload(&text), ARRAY);
    }

    #[test]
    fn tagged_fence_wins_over_untagged() {
        let text = format!("```\nnot json\n```\n```json\n{ARRAY}\n```");
        assert_eq!(extract_payload(&text), ARRAY);
    }

    #[test]
    fn all_three_wrappings_decode_identically() {
        let bare = decode_batch(ARRAY);
        let tagged = decode_batch(&format!("```json\n{ARRAY}\n```"));
        let untagged = decode_batch(&format!("```\n{ARRAY}\n```"));
        assert_eq!(bare, tagged);
        assert_eq!(bare, untagged);
        assert!(matches!(bare, Decoded::Batch(ref items) if items.len() == 1));
    }

    #[test]
    fn object_is_wrong_shape() {
        let text = json!({"ideas": []}).to_string();
        assert_eq!(decode_batch(&text), Decoded::WrongShape);
    }

    #[test]
    fn empty_array_is_wrong_shape() {
        assert_eq!(decode_batch("[]"), Decoded::WrongShape);
    }

    #[test]
    fn truncated_json_is_unparseable() {
        assert_eq!(
            decode_batch(r#"[{"method": "Pet Por"#),
            Decoded::Unparseable
        );
    }

    #[test]
    fn prose_is_unparseable() {
        assert_eq!(
            decode_batch("1. Sell your work online\n2. Teach a class"),
            Decoded::Unparseable
        );
    }

    #[test]
    fn unclosed_fence_falls_back_to_full_text() {
        // No closing fence, so the fence branch yields nothing and the
        // whole (unparseable) text is the payload.
        assert_eq!(decode_batch("```json\n[1, 2"), Decoded::Unparseable);
    }

    #[test]
    fn record_garbage_passes_through() {
        let text = r#"[{"unexpected": true}, 42, "loose string"]"#;
        match decode_batch(text) {
            Decoded::Batch(items) => assert_eq!(items.len(), 3),
            other => panic!("expected Batch, got {other:?}"),
        }
    }
}
