use unicode_width::UnicodeWidthStr;

/// Hard-wrap `s` to `width` terminal columns, honoring double-width
/// characters.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut line_width = 0;
    for c in s.chars() {
        let char_width = c.to_string().width();
        if line_width + char_width > width && !out.is_empty() {
            out.push('\n');
            line_width = 0;
        }
        out.push(c);
        line_width += char_width;
    }
    out
}

/// Truncate `s` to at most `height` lines, marking the cut with an ellipsis
/// line.
pub fn truncate_text(s: &str, height: usize) -> String {
    if height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() <= height {
        return s.to_string();
    }
    if height == 1 {
        return String::from("...");
    }
    format!("{}\n...", lines[..height - 1].join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        assert_eq!(wrap_text("Title A", 13), "Title A");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        assert_eq!(wrap_text("こんにちは、世界！", 7), "こんに\nちは、\n世界！");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello", 0), "");
    }

    #[test]
    fn test_truncate_text_no_truncation() {
        assert_eq!(truncate_text("a\nb", 2), "a\nb");
    }

    #[test]
    fn test_truncate_text_single_line() {
        assert_eq!(truncate_text("a\nb\nc", 1), "...");
    }

    #[test]
    fn test_truncate_text_multi_line() {
        assert_eq!(truncate_text("a\nb\nc\nd", 3), "a\nb\n...");
    }

    #[test]
    fn test_truncate_text_zero_height() {
        assert_eq!(truncate_text("a\nb", 0), "");
    }
}
