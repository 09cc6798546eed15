const MAX_PREVIEW_CHARS: usize = 80;

/// Shortens free text (transcripts, parent notes) for log lines. Counts
/// characters, not bytes, so CJK input never splits a code point.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_PREVIEW_CHARS {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{}... ({} chars total)", head, total)
}
