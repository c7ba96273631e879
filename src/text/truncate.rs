use crate::constants::ELLIPSIS;

/// Shortens text on a word boundary
///
/// The text is trimmed first. Text of at most `max_len` characters is
/// returned unchanged. Longer text is cut to `max_len` characters, backed up
/// to the last space inside the cut and suffixed with `...`. Without any
/// space in the cut the text is cut hard at `max_len`.
pub fn truncate(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut = take_chars(text, max_len);
    let kept = match cut.rfind(' ') {
        Some(index) => &cut[..index],
        None => cut,
    };

    format!("{kept}{ELLIPSIS}")
}

/// Cuts text to exactly `max_len` characters including the ellipsis
///
/// Unlike [`truncate`] this ignores word boundaries.
pub fn truncate_hard(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let keep = max_len.saturating_sub(ELLIPSIS.chars().count());
    format!("{}{ELLIPSIS}", take_chars(text, keep))
}

/// First line of a possibly multi-line cell, trimmed
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default().trim()
}

fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
