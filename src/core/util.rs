//! Generic utilities used across core modules.

/// Width of the separator lines in console reports.
pub const RULE_WIDTH: usize = 80;

/// Horizontal rule of `=` used between report sections.
pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Horizontal rule of `-` used between per-model blocks.
pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// First `max_chars` characters of `s` (not bytes), with no ellipsis.
/// Returns `s` unchanged when it is already short enough.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 100), "hello");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        let s = "a".repeat(100);
        assert_eq!(truncate_chars(&s, 100), s);
    }

    #[test]
    fn truncate_long_string_to_exact_chars() {
        let s = "x".repeat(250);
        let out = truncate_chars(&s, 100);
        assert_eq!(out.chars().count(), 100);
        assert_eq!(out, &s[..100]);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = "é".repeat(150);
        let out = truncate_chars(&s, 100);
        assert_eq!(out.chars().count(), 100);
        assert_eq!(out.len(), 200);
    }

    #[test]
    fn truncate_zero_is_empty() {
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn rules_have_fixed_width() {
        assert_eq!(heavy_rule().len(), RULE_WIDTH);
        assert_eq!(light_rule().len(), RULE_WIDTH);
    }
}
