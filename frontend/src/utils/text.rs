/// Cuts `text` to at most `max_chars` characters, appending `…` when
/// anything was dropped. Counts chars, not bytes.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_preview("Short answer", 120), "Short answer");
        let exact = "a".repeat(120);
        assert_eq!(truncate_preview(&exact, 120), exact);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let long = "b".repeat(300);
        let preview = truncate_preview(&long, 120);
        assert_eq!(preview.chars().count(), 121);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let preview = truncate_preview("ééééé", 3);
        assert_eq!(preview, "ééé…");
    }
}
