//! Text-level helpers: font style markers and line wrapping.

use crate::model::TextStyle;

/// Wrap text in the Markdown markers for its style.
///
/// Bold and italic combine as `***text***`; underline has no Markdown
/// syntax and becomes `<u>text</u>` around everything else. Surrounding
/// whitespace stays outside the markers, and blank text is returned as is.
pub fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let core = text.trim();
    if core.is_empty() || !style.has_styling() {
        return text.to_string();
    }

    let start = text.len() - text.trim_start().len();
    let end = start + core.len();

    let mut styled = match (style.bold, style.italic) {
        (true, true) => format!("***{}***", core),
        (true, false) => format!("**{}**", core),
        (false, true) => format!("*{}*", core),
        (false, false) => core.to_string(),
    };
    if style.underline {
        styled = format!("<u>{}</u>", styled);
    }

    format!("{}{}{}", &text[..start], styled, &text[end..])
}

/// Greedily word-wrap text to `width` columns.
///
/// Existing line breaks are kept. Lines already within the limit are
/// returned unchanged; words are never split, so a word longer than the
/// limit ends up alone on its own line.
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    // A trailing "  " is a hard break marker and must survive wrapping.
    let trailing = &line[line.trim_end().len()..];
    if let Some(last) = lines.last_mut() {
        last.push_str(trailing);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_markers() {
        let both = TextStyle {
            bold: true,
            italic: true,
            ..Default::default()
        };
        assert_eq!(apply_text_style("text", &both), "***text***");
        assert_eq!(apply_text_style("text", &TextStyle::bold()), "**text**");
        assert_eq!(apply_text_style("text", &TextStyle::italic()), "*text*");
        assert_eq!(apply_text_style("text", &TextStyle::underline()), "<u>text</u>");
        assert_eq!(apply_text_style("text", &TextStyle::new()), "text");
    }

    #[test]
    fn test_underline_wraps_emphasis() {
        let style = TextStyle {
            bold: true,
            underline: true,
            ..Default::default()
        };
        assert_eq!(apply_text_style("note", &style), "<u>**note**</u>");
    }

    #[test]
    fn test_style_keeps_surrounding_whitespace_outside() {
        assert_eq!(
            apply_text_style("  spaced words ", &TextStyle::bold()),
            "  **spaced words** "
        );
        assert_eq!(apply_text_style("   ", &TextStyle::bold()), "   ");
        assert_eq!(apply_text_style("", &TextStyle::italic()), "");
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_text("fits  exactly ", 80), "fits  exactly ");
    }

    #[test]
    fn test_wrap_greedy() {
        let wrapped = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(wrapped, "the quick\nbrown fox\njumps over\nthe lazy\ndog");
        assert!(wrapped.lines().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_long_word_kept_intact() {
        let wrapped = wrap_text("see https://example.com/a/very/long/path now", 12);
        assert_eq!(wrapped, "see\nhttps://example.com/a/very/long/path\nnow");
    }

    #[test]
    fn test_wrap_keeps_hard_break_marker() {
        assert_eq!(
            wrap_text("a fairly long first line  \nsecond", 10),
            "a fairly\nlong first\nline  \nsecond"
        );
    }

    #[test]
    fn test_wrap_keeps_existing_breaks() {
        assert_eq!(wrap_text("one two\nthree four", 7), "one two\nthree\nfour");
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        assert_eq!(wrap_text("ééé ééé", 7), "ééé ééé");
    }

    #[test]
    fn test_wrap_zero_width_is_noop() {
        assert_eq!(wrap_text("a b c", 0), "a b c");
    }
}
