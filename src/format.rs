//! Whole-document formatting passes applied after assembly.
//!
//! Three passes, in order: wrap bare URLs as clickable links, switch section
//! commands to their unnumbered forms, and rebuild the contact section as a
//! centered header block.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[\w\-./?#=&%~:]+").expect("URL pattern compiles")
});

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\textbf\{([^}]+):\} (.+?)\\\\").expect("field pattern compiles")
});

/// Run all formatting passes over the assembled document.
pub fn polish(document: &str, config: &Config) -> String {
    let doc = wrap_bare_urls(document);
    let doc = unnumber_sections(&doc);
    center_contact_block(&doc, config)
}

/// Turn bare URLs into `\href{url}{display}` with the scheme stripped from
/// the display text. URLs already inside `\url{` or `\href{` are left alone.
fn wrap_bare_urls(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut last = 0;
    for found in URL_RE.find_iter(doc) {
        out.push_str(&doc[last..found.start()]);
        let before = &doc[..found.start()];
        let url = found.as_str();
        if before.ends_with("\\url{") || before.ends_with("\\href{") {
            out.push_str(url);
        } else {
            let display = url
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            out.push_str(&format!("\\href{{{url}}}{{{display}}}"));
        }
        last = found.end();
    }
    out.push_str(&doc[last..]);
    out
}

fn unnumber_sections(doc: &str) -> String {
    doc.replace("\\section{", "\\section*{")
        .replace("\\subsection{", "\\subsection*{")
        .replace("\\subsubsection{", "\\subsubsection*{")
}

/// Rebuild the configured contact section as a centered header: large bold
/// name, location line, contact values grouped a few per line. A no-op when
/// the section is absent or holds no recognizable fields.
fn center_contact_block(doc: &str, config: &Config) -> String {
    let marker = format!("\\section*{{{}}}", config.header.section);
    let Some(start) = doc.find(&marker) else {
        return doc.to_string();
    };
    let body_start = start + marker.len();
    let rest = &doc[body_start..];
    let end = rest
        .find("\\section*")
        .or_else(|| rest.find("\\end{document}"))
        .unwrap_or(rest.len());
    let block = &rest[..end];

    let mut name = String::new();
    let mut location = String::new();
    let mut contacts = Vec::new();
    for caps in FIELD_RE.captures_iter(block) {
        let value = caps[2].trim().to_string();
        match &caps[1] {
            "Name" => name = value,
            "Location" => location = value,
            _ => contacts.push(value),
        }
    }
    if name.is_empty() && location.is_empty() && contacts.is_empty() {
        return doc.to_string();
    }

    let mut header = vec!["\\begin{center}".to_string()];
    if !name.is_empty() {
        header.push(format!("{{\\LARGE\\textbf{{{name}}}}}\\\\"));
    }
    if !location.is_empty() {
        header.push(format!("{location}\\\\"));
    }
    for group in contacts.chunks(config.header.contacts_per_line.max(1)) {
        header.push(format!("{}\\\\", group.join("  |  ")));
    }
    header.push("\\end{center}".to_string());

    format!(
        "{}{}\n{}",
        &doc[..start],
        header.join("\n"),
        &doc[body_start + end..]
    )
}
