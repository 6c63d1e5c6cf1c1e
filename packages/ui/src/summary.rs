//! Card summary text.

/// Characters kept from a description or biography on a card.
pub const SUMMARY_LIMIT: usize = 150;

/// Shorten free text for a card.
///
/// Present, non-empty text keeps its first [`SUMMARY_LIMIT`] characters,
/// trimmed, followed by `...`. Short text gets the ellipsis too. Absent or
/// empty text yields an empty string.
///
/// Characters are Unicode scalar values, so an emoji counts as one and is never
/// split. Counting UTF-16 code units would cut text with astral characters
/// earlier.
pub fn truncate_summary(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            let head: String = text.chars().take(SUMMARY_LIMIT).collect();
            format!("{}...", head.trim())
        }
        _ => String::new(),
    }
}
