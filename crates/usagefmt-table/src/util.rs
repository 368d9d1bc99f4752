//! Width measurement and line-breaking helpers.
//!
//! Widths are terminal display columns, so CJK characters count as 2 and
//! combining marks as 0.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line separator used at the end of every rendered line.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line separator used at the end of every rendered line.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Returns the display width of a string.
///
/// # Example
///
/// ```rust
/// use usagefmt_table::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Returns the longest prefix of `s` whose display width is at most `max_width`.
///
/// The cut always lands on a character boundary, never inside a wide character.
///
/// ```rust
/// use usagefmt_table::prefix_within;
///
/// assert_eq!(prefix_within("--create", 5), "--cre");
/// assert_eq!(prefix_within("abc", 10), "abc");
/// ```
pub fn prefix_within(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Splits text into line-break segments: a run of non-whitespace followed by
/// the whitespace after it.
///
/// Lines may only break between segments. A hyphen is not a break point, so
/// option names like `--long-name` are never split.
///
/// ```rust
/// use usagefmt_table::line_segments;
///
/// assert_eq!(line_segments("-c, --create  now"), vec!["-c, ", "--create  ", "now"]);
/// ```
pub fn line_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_space = false;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            segments.push(&text[start..idx]);
            start = idx;
            in_space = false;
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}

/// Returns the longest prefix of whole segments that fits in `max_width`.
///
/// A segment's trailing whitespace counts toward its width. Returns an empty
/// string when not even the first segment fits.
pub fn words_within(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for segment in line_segments(text) {
        let w = display_width(segment);
        if used + w > max_width {
            break;
        }
        used += w;
        end += segment.len();
    }
    &text[..end]
}

/// The next line to place in `max_width` columns: whole words when any fit,
/// else a cut word, else the first character even if it is wider.
///
/// Returns "" only for empty text.
///
/// ```rust
/// use usagefmt_table::fit_within;
///
/// assert_eq!(fit_within("ab cd", 4), "ab ");
/// assert_eq!(fit_within("abcdef", 4), "abcd");
/// assert_eq!(fit_within("日本", 1), "日");
/// ```
pub fn fit_within(text: &str, max_width: usize) -> &str {
    let words = words_within(text, max_width);
    if !words.is_empty() {
        return words;
    }
    let prefix = prefix_within(text, max_width);
    if !prefix.is_empty() {
        return prefix;
    }
    text.chars().next().map_or("", |c| &text[..c.len_utf8()])
}

/// Word-wraps text into lines no wider than `width`.
///
/// Words longer than `width` are cut. A character wider than `width` gets a
/// line of its own. Trailing whitespace is removed from every line.
///
/// ```rust
/// use usagefmt_table::wrap;
///
/// // trailing spaces count toward the width while fitting
/// assert_eq!(wrap("hello world foo bar", 12), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello", "world foo", "bar"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let line = fit_within(rest, width);
        lines.push(line.trim_end().to_string());
        rest = &rest[line.len()..];
    }
    lines
}
