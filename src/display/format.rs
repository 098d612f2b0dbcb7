//! Small text layout helpers shared by the display modules

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₦₦₦₦₦₦₦", 6), "₦₦₦...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_alignment_and_rules() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(right_align("abcdef", 3), "abcdef");
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
