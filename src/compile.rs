//! Compile the generated LaTeX with an external engine.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::config::Config;
use crate::error::{Error, Result};

/// Lines of engine output kept in a compile error.
const LOG_TAIL_LINES: usize = 30;

/// Run the configured LaTeX engine on `tex_path`, producing
/// `<out_dir>/<jobname>.pdf`. Auxiliary files are swept from the output
/// directory whether or not the engine succeeds.
pub fn to_pdf(tex_path: &Path, out_dir: &Path, jobname: &str, config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let engine = config.build.engine.as_str();
    log::info!("running {engine} on {}", tex_path.display());
    let outcome = run_engine(engine, tex_path, out_dir, jobname);
    clean_aux_files(out_dir);

    let output = outcome?;
    if !output.status.success() {
        return Err(Error::Compile {
            engine: engine.to_string(),
            status: output.status,
            log: log_tail(&output),
        });
    }

    let pdf_path = out_dir.join(format!("{jobname}.pdf"));
    if !pdf_path.exists() {
        return Err(Error::MissingPdf(pdf_path));
    }
    log::info!("PDF generated: {}", pdf_path.display());
    Ok(pdf_path)
}

fn run_engine(engine: &str, tex_path: &Path, out_dir: &Path, jobname: &str) -> Result<Output> {
    Command::new(engine)
        .arg("-interaction=nonstopmode")
        .arg(format!("-output-directory={}", out_dir.display()))
        .arg(format!("-jobname={jobname}"))
        .arg(tex_path)
        .output()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::EngineMissing(engine.to_string()),
            _ => Error::Io(err),
        })
}

fn log_tail(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined: Vec<&str> = stdout.lines().chain(stderr.lines()).collect();
    let skip = combined.len().saturating_sub(LOG_TAIL_LINES);
    combined[skip..].join("\n")
}

/// Remove engine byproducts (.aux, .log, .out, ...) from the output
/// directory, keeping only .pdf and .tex files.
fn clean_aux_files(out_dir: &Path) {
    let Ok(entries) = fs::read_dir(out_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let keep = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("pdf" | "tex")
        );
        if !keep {
            if let Err(err) = fs::remove_file(&path) {
                log::warn!("could not remove {}: {err}", path.display());
            }
        }
    }
}
