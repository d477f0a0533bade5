//! Plain text with light markdown conventions to LaTeX.
//!
//! A single pass over the lines with one piece of state: whether an itemize
//! block is currently open. The list is closed on every non-bullet line and
//! at end of input, so the emitted markup never leaves a block dangling.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::escape::escape_latex;
use crate::inline::format_inline;
use crate::line::{self, LineKind};

/// Convert light-markup plain text to LaTeX.
pub fn text_to_latex(input: &str) -> String {
    let lines: Vec<&str> = input.lines().map(str::trim_end).collect();
    let mut latex: Vec<String> = Vec::new();
    let mut in_list = false;

    for idx in 0..lines.len() {
        match line::classify(&lines, idx) {
            LineKind::Blank => close_list(&mut latex, &mut in_list),
            LineKind::Heading { depth, title } => {
                close_list(&mut latex, &mut in_list);
                latex.push(format!(
                    "\\{}{{{}}}",
                    heading_command(depth),
                    escape_latex(title)
                ));
            }
            LineKind::Bullet { text } => {
                if !in_list {
                    latex.push("\\begin{itemize}".to_string());
                    in_list = true;
                }
                latex.push(format!("\\item {}", escape_latex(text)));
            }
            LineKind::KeyValue { key, value } => {
                close_list(&mut latex, &mut in_list);
                latex.push(format!(
                    "\\textbf{{{}:}} {}\\\\",
                    escape_latex(key),
                    escape_latex(value)
                ));
            }
            LineKind::Plain { text } => {
                close_list(&mut latex, &mut in_list);
                latex.push(format!("{}\\\\", format_inline(text)));
            }
        }
    }
    close_list(&mut latex, &mut in_list);

    latex.join("\n")
}

/// Convert a `.txt` section file. A missing path is a hard error; an
/// unreadable file is logged and skipped via `None`.
pub fn to_latex(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(text_to_latex(&raw))),
        Err(err) => {
            log::warn!("skipping {}: {err}", path.display());
            Ok(None)
        }
    }
}

pub(crate) fn heading_command(depth: usize) -> &'static str {
    match depth {
        1 => "section",
        2 => "subsection",
        3 => "subsubsection",
        _ => "paragraph",
    }
}

fn close_list(latex: &mut Vec<String>, in_list: &mut bool) {
    if *in_list {
        latex.push("\\end{itemize}".to_string());
        *in_list = false;
    }
}
