use serde::Serialize;

/// Drops every non-ASCII byte from `bytes`, keeping the rest as text. Lossy
/// strip, not replacement.
pub fn strip_non_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

/// Renders a value as indented JSON for display.
pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_non_ascii() {
        assert_eq!(strip_non_ascii(b"plain ascii"), "plain ascii");
        assert_eq!(strip_non_ascii("caf\u{e9}".as_bytes()), "caf");
        assert_eq!(strip_non_ascii("\u{2713} ok".as_bytes()), " ok");
        assert_eq!(strip_non_ascii(&[0xff, b'a', 0x80, b'b']), "ab");
    }

    #[test]
    fn test_render_json() {
        let rendered = render_json(&json!({"a": 1})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }
}
