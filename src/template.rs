//! Wrap assembled section content in a complete LaTeX document.

use crate::config::Config;

/// Produce the full document: preamble, body, `\end{document}`.
pub fn wrap_document(body: &str, config: &Config) -> String {
    let page_style = if config.page.numbers { "plain" } else { "empty" };
    let preamble = format!(
        "\\documentclass[{font_size},{paper}]{{article}}

% Required packages
\\usepackage[utf8]{{inputenc}}
\\usepackage[T1]{{fontenc}}
\\usepackage{{geometry}}
\\usepackage{{hyperref}}
\\usepackage{{enumitem}}
\\usepackage{{titlesec}}

% Page configuration
\\geometry{{margin={margin}}}
\\pagestyle{{{page_style}}}

% Hyperref configuration
\\hypersetup{{
    colorlinks=true,
    linkcolor=black,
    urlcolor={url_color},
    citecolor=black
}}

% Tight list spacing (pandoc-compatible)
\\providecommand{{\\tightlist}}{{\\setlength{{\\itemsep}}{{0pt}}\\setlength{{\\parskip}}{{0pt}}}}

\\begin{{document}}",
        font_size = config.page.font_size,
        paper = config.page.paper,
        margin = config.page.margin,
        url_color = config.links.color,
    );

    format!("{preamble}\n\n{}\n\n\\end{{document}}\n", body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_body_between_preamble_and_end() {
        let doc = wrap_document("\\section{Hi}", &Config::default());
        assert!(doc.starts_with("\\documentclass[11pt,a4paper]{article}"));
        assert!(doc.contains("\\geometry{margin=1in}"));
        assert!(doc.contains("\\pagestyle{empty}"));
        assert!(doc.contains("urlcolor=blue"));
        assert!(doc.contains("\n\n\\section{Hi}\n\n"));
        assert!(doc.ends_with("\\end{document}\n"));
    }

    #[test]
    fn page_numbers_switch_the_page_style() {
        let mut config = Config::default();
        config.page.numbers = true;
        let doc = wrap_document("x", &config);
        assert!(doc.contains("\\pagestyle{plain}"));
    }
}
