//! Inline `**bold**` and `*italic*` formatting for plain text lines.
//!
//! Matched spans are parked behind numbered tokens before the whole line is
//! escaped, then reinserted, so the macro text they carry is never escaped a
//! second time. Bold runs first: consuming `**` pairs up front keeps the
//! italic scanner from splitting them. The delimiters are ASCII, so byte
//! positions are valid slice boundaries.

use crate::escape::escape_latex;

/// Format a plain text line: bold/italic spans become `\textbf`/`\textit`,
/// everything else is escaped. A line with no markers is simply escaped.
pub fn format_inline(line: &str) -> String {
    let mut spans: Vec<String> = Vec::new();
    let parked = extract_bold(line, &mut spans);
    let parked = extract_italic(&parked, &mut spans);

    let mut out = escape_latex(&parked);
    for (idx, markup) in spans.iter().enumerate() {
        out = out.replace(&format!("@@PH{idx}@@"), markup);
    }
    out
}

fn park(spans: &mut Vec<String>, markup: String) -> String {
    let token = format!("@@PH{}@@", spans.len());
    spans.push(markup);
    token
}

fn extract_bold(line: &str, spans: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        match bold_close(after) {
            Some(close) => {
                out.push_str(&rest[..open]);
                let markup = format!("\\textbf{{{}}}", escape_latex(&after[..close]));
                out.push_str(&park(spans, markup));
                rest = &after[close + 2..];
            }
            None => {
                // unpaired opener stays as literal text
                out.push_str(&rest[..open + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// First `**` leaving at least one character of inner text.
fn bold_close(s: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = s[from..].find("**") {
        let at = from + found;
        if at >= 1 {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

fn extract_italic(line: &str, spans: &mut Vec<String>) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut pos = 0;
    loop {
        let Some(open) = find_lone_star(bytes, pos) else { break };
        // a lone star is never adjacent to another, so close >= open + 2
        let Some(close) = find_lone_star(bytes, open + 1) else { break };
        out.push_str(&line[pos..open]);
        let markup = format!("\\textit{{{}}}", escape_latex(&line[open + 1..close]));
        out.push_str(&park(spans, markup));
        pos = close + 1;
    }
    out.push_str(&line[pos..]);
    out
}

/// Next `*` with no `*` on either side (the delimiter the italic rule uses;
/// doubled stars belong to bold or stay literal).
fn find_lone_star(bytes: &[u8], from: usize) -> Option<usize> {
    for i in from..bytes.len() {
        if bytes[i] != b'*' {
            continue;
        }
        let prev_star = i > 0 && bytes[i - 1] == b'*';
        let next_star = i + 1 < bytes.len() && bytes[i + 1] == b'*';
        if !prev_star && !next_star {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_is_just_escaped() {
        assert_eq!(format_inline("plain text"), "plain text");
        assert_eq!(format_inline("R&D work"), "R\\&D work");
    }

    #[test]
    fn bold_span() {
        assert_eq!(format_inline("**bold**"), "\\textbf{bold}");
        assert_eq!(format_inline("a **b** c"), "a \\textbf{b} c");
    }

    #[test]
    fn italic_span() {
        assert_eq!(format_inline("*italic*"), "\\textit{italic}");
    }

    #[test]
    fn bold_and_italic_together() {
        assert_eq!(
            format_inline("This is **bold** and *italic*."),
            "This is \\textbf{bold} and \\textit{italic}."
        );
    }

    #[test]
    fn inner_text_is_escaped_once() {
        assert_eq!(format_inline("**50%**"), "\\textbf{50\\%}");
        assert_eq!(format_inline("*a_b*"), "\\textit{a\\_b}");
    }

    #[test]
    fn url_inside_bold_is_protected() {
        assert_eq!(
            format_inline("**http://example.com/a_b**"),
            "\\textbf{\\url{http://example.com/a_b}}"
        );
    }

    #[test]
    fn unpaired_markers_stay_literal() {
        assert_eq!(format_inline("**oops"), "**oops");
        assert_eq!(format_inline("2 * 3"), "2 * 3");
    }

    #[test]
    fn italic_does_not_eat_bold_delimiters() {
        // the star pairs here are all doubled, so no italic span exists
        assert_eq!(format_inline("****"), "****");
        assert_eq!(format_inline("**a** **b**"), "\\textbf{a} \\textbf{b}");
    }

    #[test]
    fn empty_bold_pair_is_literal() {
        assert_eq!(format_inline("****x**"), "\\textbf{**x}");
    }
}
