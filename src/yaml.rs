//! YAML section files to LaTeX.
//!
//! Walks a `serde_yaml::Value` tree: top-level keys become sections, nested
//! mappings become subsections by depth, sequences become one itemize block,
//! scalars become `\textbf{Key:} value` lines. Snake_case keys are shown
//! title-cased.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::escape::escape_latex;

/// Convert a `.yaml` section file. A missing path is a hard error; an
/// unreadable file or malformed YAML is logged and skipped via `None`.
pub fn to_latex(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("skipping {}: {err}", path.display());
            return Ok(None);
        }
    };
    match serde_yaml::from_str::<Value>(&raw) {
        Ok(value) => Ok(Some(yaml_to_latex(&value))),
        Err(err) => {
            log::warn!("skipping {}: invalid YAML: {err}", path.display());
            Ok(None)
        }
    }
}

/// Convert an already-parsed YAML document.
pub fn yaml_to_latex(value: &Value) -> String {
    let mut latex = Vec::new();
    walk(value, "", 0, &mut latex);
    latex.join("\n")
}

fn walk(value: &Value, title: &str, depth: usize, latex: &mut Vec<String>) {
    match value {
        Value::Mapping(map) => {
            if depth == 0 {
                for (key, val) in map {
                    walk(val, &title_case(&key_text(key)), 1, latex);
                }
                return;
            }

            latex.push(section_line(title, depth));
            for (key, val) in map {
                match val {
                    Value::Mapping(_) | Value::Sequence(_) => {
                        walk(val, &title_case(&key_text(key)), depth + 1, latex);
                    }
                    _ => latex.push(field_line(&key_text(key), val)),
                }
            }
        }
        Value::Sequence(items) => {
            if !title.is_empty() {
                latex.push(section_line(title, depth));
            }
            latex.push("\\begin{itemize}".to_string());
            for item in items {
                match item {
                    Value::Mapping(map) => {
                        let parts: Vec<String> = map
                            .iter()
                            .map(|(key, val)| {
                                format!(
                                    "{}: {}",
                                    escape_latex(&title_case(&key_text(key))),
                                    clean(val)
                                )
                            })
                            .collect();
                        latex.push(format!("\\item {}", parts.join("; ")));
                    }
                    _ => latex.push(format!("\\item {}", clean(item))),
                }
            }
            latex.push("\\end{itemize}".to_string());
        }
        _ => latex.push(clean(value)),
    }
}

fn section_line(title: &str, depth: usize) -> String {
    let command = match depth {
        1 => "section",
        2 => "subsection",
        _ => "subsubsection",
    };
    format!("\\{command}{{{}}}", escape_latex(title))
}

fn field_line(key: &str, value: &Value) -> String {
    format!(
        "\\textbf{{{}:}} {}\\\\",
        escape_latex(&title_case(key)),
        clean(value)
    )
}

/// Render a scalar: collapse all whitespace runs to single spaces, then
/// escape.
fn clean(value: &Value) -> String {
    let text = scalar_text(value);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    escape_latex(&collapsed)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => scalar_text(other),
    }
}

/// `work_experience` -> `Work Experience`.
fn title_case(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(yaml: &str) -> String {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        yaml_to_latex(&value)
    }

    #[test]
    fn top_level_keys_become_sections() {
        let out = convert("personal_information:\n  name: Jane Doe\n  location: Springfield\n");
        assert_eq!(
            out,
            "\\section{Personal Information}\n\
             \\textbf{Name:} Jane Doe\\\\\n\
             \\textbf{Location:} Springfield\\\\"
        );
    }

    #[test]
    fn nested_mappings_become_subsections() {
        let out = convert("education:\n  university:\n    degree: BSc\n");
        assert_eq!(
            out,
            "\\section{Education}\n\\subsection{University}\n\\textbf{Degree:} BSc\\\\"
        );
    }

    #[test]
    fn sequences_become_one_itemize_block() {
        let out = convert("skills:\n  - Rust\n  - LaTeX\n");
        assert_eq!(
            out,
            "\\section{Skills}\n\\begin{itemize}\n\\item Rust\n\\item LaTeX\n\\end{itemize}"
        );
    }

    #[test]
    fn mapping_items_join_fields_with_semicolons() {
        let out = convert("jobs:\n  - title: Engineer\n    years: 3\n");
        assert_eq!(
            out,
            "\\section{Jobs}\n\\begin{itemize}\n\\item Title: Engineer; Years: 3\n\\end{itemize}"
        );
    }

    #[test]
    fn scalar_values_are_cleaned_and_escaped() {
        let out = convert("summary:\n  profile: >\n    R&D lead,\n    100% remote\n");
        assert_eq!(
            out,
            "\\section{Summary}\n\\textbf{Profile:} R\\&D lead, 100\\% remote\\\\"
        );
    }

    #[test]
    fn urls_in_values_are_wrapped() {
        let out = convert("links:\n  github: https://github.com/jane_doe\n");
        assert_eq!(
            out,
            "\\section{Links}\n\\textbf{Github:} \\url{https://github.com/jane_doe}\\\\"
        );
    }

    #[test]
    fn missing_file_is_a_hard_error() {
        let err = to_latex(Path::new("/nonexistent/cv.yaml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
