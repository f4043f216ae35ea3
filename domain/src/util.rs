//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Used to keep submitted content short in logs and records.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview: whitespace runs collapsed, then truncated.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated = truncate_str(&collapsed, max_bytes);
    if truncated.len() < collapsed.len() {
        format!("{}...", truncated)
    } else {
        collapsed
    }
}
