//! Line classification for the plain-text converter.
//!
//! The check order is load-bearing: marked heading, then isolated heading,
//! then bullet, then key-value, else plain text. An isolated heading is a
//! short line surrounded by blank lines that none of the earlier kinds
//! claimed; reordering the checks changes what that rule matches.

/// What one input line is, after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading { depth: usize, title: &'a str },
    Bullet { text: &'a str },
    KeyValue { key: &'a str, value: &'a str },
    Plain { text: &'a str },
}

/// Classify the line at `idx`. Neighboring lines are consulted only for the
/// blank-line context of the isolated-heading check.
pub fn classify<'a>(lines: &[&'a str], idx: usize) -> LineKind<'a> {
    let line = lines[idx].trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        let depth = line.chars().take_while(|&c| c == '#').count();
        let title = line.trim_start_matches('#').trim();
        if !title.is_empty() {
            return LineKind::Heading { depth, title };
        }
        // markers with no title fall through to plain text
    }

    if is_isolated_heading(lines, idx) {
        return LineKind::Heading { depth: 1, title: line };
    }

    if let Some(text) = line.strip_prefix("- ") {
        return LineKind::Bullet { text: text.trim() };
    }

    if let Some((key, value)) = line.split_once(':') {
        let (key, value) = (key.trim(), value.trim());
        if !key.is_empty() && !value.is_empty() {
            return LineKind::KeyValue { key, value };
        }
    }

    LineKind::Plain { text: line }
}

/// A heading without markers: no `#`, no bullet prefix, no colon, at most
/// 120 characters, and blank on both sides (document edges count as blank).
fn is_isolated_heading(lines: &[&str], idx: usize) -> bool {
    let line = lines[idx].trim();
    if line.starts_with('#') || line.starts_with("- ") || line.contains(':') {
        return false;
    }
    if line.chars().count() > 120 {
        return false;
    }
    let prev_blank = idx == 0 || lines[idx - 1].trim().is_empty();
    let next_blank = idx + 1 == lines.len() || lines[idx + 1].trim().is_empty();
    prev_blank && next_blank
}
