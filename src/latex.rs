//! Emit LaTeX from parsed Markdown blocks.

use crate::block::{Block, List, Span};
use crate::escape::escape_latex;

/// Convert blocks to LaTeX source, blocks separated by blank lines.
pub fn blocks_to_latex(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, &mut out);
    }
    out.trim_end().to_string()
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push('\\');
            out.push_str(crate::text::heading_command(*level as usize));
            out.push('{');
            spans_to_latex(content, out);
            out.push_str("}\n\n");
        }
        Block::Paragraph { content } => {
            spans_to_latex(content, out);
            out.push_str("\n\n");
        }
        Block::CodeBlock { content } => {
            out.push_str("\\begin{verbatim}\n");
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("\\end{verbatim}\n\n");
        }
        Block::List(list) => {
            list_to_latex(list, 0, out);
            out.push('\n');
        }
        Block::Rule => {
            out.push_str("\\noindent\\hrulefill\n\n");
        }
    }
}

fn spans_to_latex(spans: &[Span], out: &mut String) {
    for span in spans {
        span_to_latex(span, out);
    }
}

fn span_to_latex(span: &Span, out: &mut String) {
    match span {
        Span::Text(text) => out.push_str(&escape_latex(text)),
        Span::Bold(inner) => {
            out.push_str("\\textbf{");
            spans_to_latex(inner, out);
            out.push('}');
        }
        Span::Italic(inner) => {
            out.push_str("\\textit{");
            spans_to_latex(inner, out);
            out.push('}');
        }
        Span::Code(text) => {
            out.push_str("\\texttt{");
            out.push_str(&escape_latex(text));
            out.push('}');
        }
        Span::Link { url, content } => {
            out.push_str("\\href{");
            out.push_str(url);
            out.push_str("}{");
            spans_to_latex(content, out);
            out.push('}');
        }
        Span::LineBreak => out.push_str("\\\\\n"),
    }
}

fn list_to_latex(list: &List, indent: usize, out: &mut String) {
    let env = if list.ordered { "enumerate" } else { "itemize" };
    let pad = "  ".repeat(indent);

    out.push_str(&pad);
    out.push_str(&format!("\\begin{{{env}}}\n"));
    for item in &list.items {
        out.push_str(&pad);
        out.push_str("  \\item ");
        spans_to_latex(&item.content, out);
        out.push('\n');
        if let Some(nested) = &item.nested {
            list_to_latex(nested, indent + 1, out);
        }
    }
    out.push_str(&pad);
    out.push_str(&format!("\\end{{{env}}}\n"));
}

#[cfg(test)]
mod tests {
    use crate::markdown::markdown_to_latex;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(markdown_to_latex("# Hello"), "\\section{Hello}");
        assert_eq!(markdown_to_latex("### Deep"), "\\subsubsection{Deep}");
        assert_eq!(markdown_to_latex("#### Deeper"), "\\paragraph{Deeper}");
    }

    #[test]
    fn paragraph() {
        assert_eq!(markdown_to_latex("Hello world"), "Hello world");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(markdown_to_latex("**bold**"), "\\textbf{bold}");
        assert_eq!(markdown_to_latex("*italic*"), "\\textit{italic}");
        assert_eq!(markdown_to_latex("***both***"), "\\textit{\\textbf{both}}");
    }

    #[test]
    fn inline_code() {
        assert_eq!(markdown_to_latex("`a_b`"), "\\texttt{a\\_b}");
    }

    #[test]
    fn link() {
        assert_eq!(
            markdown_to_latex("[site](https://example.com)"),
            "\\href{https://example.com}{site}"
        );
    }

    #[test]
    fn bare_url_is_wrapped() {
        assert_eq!(
            markdown_to_latex("see http://example.com/a_b"),
            "see \\url{http://example.com/a_b}"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_latex("- one\n- two"),
            "\\begin{itemize}\n  \\item one\n  \\item two\n\\end{itemize}"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_latex("1. one\n2. two"),
            "\\begin{enumerate}\n  \\item one\n  \\item two\n\\end{enumerate}"
        );
    }

    #[test]
    fn nested_list() {
        assert_eq!(
            markdown_to_latex("- a\n  - b"),
            "\\begin{itemize}\n  \\item a\n  \\begin{itemize}\n    \\item b\n  \\end{itemize}\n\\end{itemize}"
        );
    }

    #[test]
    fn soft_breaks_become_hard_breaks() {
        assert_eq!(
            markdown_to_latex("line one\nline two"),
            "line one\\\\\nline two"
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            markdown_to_latex("```\nlet x = 1;\n```"),
            "\\begin{verbatim}\nlet x = 1;\n\\end{verbatim}"
        );
    }

    #[test]
    fn rule() {
        assert_eq!(markdown_to_latex("---"), "\\noindent\\hrulefill");
    }

    #[test]
    fn special_characters_in_text() {
        assert_eq!(markdown_to_latex("100% of R&D"), "100\\% of R\\&D");
    }

    #[test]
    fn frontmatter_is_stripped() {
        assert_eq!(
            markdown_to_latex("---\ntitle: CV\n---\n\nHello"),
            "Hello"
        );
    }
}
