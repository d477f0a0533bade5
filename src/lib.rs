mod block;
mod compile;
mod config;
mod error;
mod escape;
mod format;
mod inline;
mod latex;
mod line;
mod markdown;
mod sections;
mod template;
mod text;
mod yaml;

pub use block::{Block, List, ListItem, Span};
pub use config::Config;
pub use error::{Error, Result};
pub use escape::escape_latex;

use std::path::{Path, PathBuf};

/// Convert light-markup plain text to LaTeX.
pub fn text_to_latex(text: &str) -> String {
    text::text_to_latex(text)
}

/// Convert Markdown text to LaTeX.
pub fn markdown_to_latex(markdown: &str) -> String {
    markdown::markdown_to_latex(markdown)
}

/// Convert one section file according to its extension. `Ok(None)` means
/// the file was skipped; the reason has already been logged.
pub fn convert_file(path: &Path) -> Result<Option<String>> {
    sections::convert_file(path)
}

/// Convert every section file in `dir` into a joined LaTeX body.
pub fn assemble_sections(dir: &Path) -> Result<String> {
    sections::assemble(dir)
}

/// Assemble the section files in `dir` into a complete, polished LaTeX
/// document ready for compilation.
pub fn build_document(dir: &Path, config: &Config) -> Result<String> {
    let body = sections::assemble(dir)?;
    let document = template::wrap_document(&body, config);
    Ok(format::polish(&document, config))
}

/// Compile a written `.tex` file to `<out_dir>/<jobname>.pdf` with the
/// configured LaTeX engine.
pub fn compile_pdf(
    tex_path: &Path,
    out_dir: &Path,
    jobname: &str,
    config: &Config,
) -> Result<PathBuf> {
    compile::to_pdf(tex_path, out_dir, jobname, config)
}
