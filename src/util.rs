// src/util.rs — Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string for display/logging (UTF-8 safe).
///
/// Returns a substring of at most `max_len` bytes, ensuring the cut
/// point falls on a valid UTF-8 character boundary.
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Greedy word wrap to `width` display columns.
///
/// Explicit newlines are kept. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = word.width();
            let needed = if line_width == 0 { word_width } else { word_width + 1 };
            if line_width > 0 && line_width + needed > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            // Hard-split words that can never fit.
            if word_width > width {
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if line_width > 0 && line_width + cw > width {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += cw;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        out.push(line);
    }

    out
}
