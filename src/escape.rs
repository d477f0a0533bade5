//! LaTeX escaping with URL protection.
//!
//! Bare URLs are lifted out behind numbered placeholder tokens before the
//! character substitutions run, then restored wrapped in `\url{}`, so their
//! interiors (underscores, tildes, ...) are never escaped.

/// Substitutions applied in order. Backslash must come first: every later
/// replacement inserts backslashes of its own.
const SPECIAL_CHARS: &[(&str, &str)] = &[
    ("\\", "\\textbackslash{}"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
];

/// Escape `text` for LaTeX, wrapping any bare `http(s)://` URL in `\url{}`.
pub fn escape_latex(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut urls = Vec::new();
    let mut out = protect_urls(text, &mut urls);

    for (raw, escaped) in SPECIAL_CHARS {
        out = out.replace(raw, escaped);
    }

    for (idx, url) in urls.iter().enumerate() {
        out = out.replace(&format!("@@URL{idx}@@"), &format!("\\url{{{url}}}"));
    }
    out
}

/// Replace each URL with a numbered token, recording the original. A URL is
/// the longest non-whitespace run starting at a scheme prefix.
fn protect_urls(text: &str, urls: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = find_url_start(rest) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        out.push_str(&format!("@@URL{}@@", urls.len()));
        urls.push(tail[..end].to_string());
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

fn find_url_start(s: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = s[from..].find("http") {
        let at = from + found;
        let tail = &s[at..];
        if tail.starts_with("http://") || tail.starts_with("https://") {
            return Some(at);
        }
        from = at + 4;
    }
    None
}
