//! 文本截断（按终端显示宽度）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `max_width` 列以内，超出时以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 右侧补空格到 `width` 列
pub fn pad_right(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("api", 10), "api");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn long_text_ends_with_ellipsis_within_width() {
        let out = truncate("platform-api-service", 8);
        assert_eq!(out, "platfor…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn wide_characters_are_counted_by_columns() {
        let out = truncate("Основной репозиторий", 6);
        assert!(out.width() <= 6);
        let out = truncate("仓库列表页面", 5);
        assert_eq!(out, "仓库…");
    }

    #[test]
    fn pad_right_fills_to_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }
}
