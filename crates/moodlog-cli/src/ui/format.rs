//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Render a 1-5 rating as a bar, e.g. `★★★☆☆` or `***--`.
///
/// Ratings outside the scale are clamped for display only.
pub fn rating_bar(rating: i32, max: i32, unicode: bool) -> String {
    let filled = rating.clamp(0, max) as usize;
    let empty = max.max(0) as usize - filled;
    let (on, off) = if unicode {
        ("\u{2605}", "\u{2606}")
    } else {
        ("*", "-")
    };
    format!("{}{}", on.repeat(filled), off.repeat(empty))
}

/// Collapse a gratitude note onto one line for tables.
pub fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
