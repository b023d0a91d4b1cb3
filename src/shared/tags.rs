// src/shared/tags.rs

//
// ──────────────────────────────────────────────────────────
// Tag-list handling
// ──────────────────────────────────────────────────────────
// Technology tags, skill lists and certification entries all arrive
// from comma-separated form fields; entry order is user-chosen and
// preserved.
//

/// Split a comma-separated form field into trimmed, non-empty tags.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Trim a list of free-text entries and drop the empty ones.
pub fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order_and_drops_blanks() {
        assert_eq!(
            parse_tag_list("Python, PyTorch, , BERT ,"),
            vec!["Python", "PyTorch", "BERT"]
        );
        assert!(parse_tag_list("  ").is_empty());
    }

    #[test]
    fn clean_trims_and_filters() {
        let entries = vec![
            "  AWS Certified ".to_string(),
            "".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(clean_entries(entries), vec!["AWS Certified"]);
    }
}
