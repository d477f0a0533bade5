//! Assemble a directory of section files into one LaTeX body.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::{markdown, text, yaml};

/// Convert one section file according to its extension. `Ok(None)` means
/// the file was skipped (unsupported type or a logged conversion failure);
/// a missing path is a hard error.
pub fn convert_file(path: &Path) -> Result<Option<String>> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => yaml::to_latex(path),
        "md" | "markdown" => markdown::to_latex(path),
        "txt" => text::to_latex(path),
        "tex" => {
            if !path.exists() {
                return Err(Error::NotFound(path.to_path_buf()));
            }
            match fs::read_to_string(path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    Ok(None)
                }
            }
        }
        _ => {
            log::warn!("unsupported file type, skipping {}", path.display());
            Ok(None)
        }
    }
}

/// Convert every section file in `dir`, sorted by file name, and join the
/// results with blank lines. Files that fail to convert are skipped; a
/// missing directory is a hard error.
pub fn assemble(dir: &Path) -> Result<String> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut chunks = Vec::new();
    for path in &paths {
        log::info!("processing {}", path.display());
        if let Some(content) = convert_file(path)? {
            let content = content.trim();
            if !content.is_empty() {
                chunks.push(content.to_string());
            }
        }
    }
    Ok(chunks.join("\n\n"))
}
