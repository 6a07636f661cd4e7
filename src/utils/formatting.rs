//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Width in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// "1 Low", "0 Medium", "2 High"
pub fn count_label(count: usize, label: &str) -> String {
    format!("{count} {label}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_counts_columns_not_bytes() {
        assert_eq!(pad_right("→", 3), "→  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }
}
