use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cvtex::Config;

#[derive(Parser)]
#[command(name = "cvtex")]
#[command(about = "Assemble CV section files into LaTeX and compile a PDF")]
struct Cli {
    /// Directory containing the section files
    #[arg(default_value = "cv_data/sections")]
    sections: PathBuf,

    /// Output directory for the generated files
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Base name of the generated .tex and .pdf files
    #[arg(long, default_value = "cv")]
    jobname: String,

    /// Configuration file
    #[arg(long, default_value = "cvtex.toml")]
    config: PathBuf,

    /// Write the .tex file but skip PDF compilation
    #[arg(long)]
    tex_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = Config::load(&cli.config);

    let document = cvtex::build_document(&cli.sections, &config)
        .with_context(|| format!("failed to assemble {}", cli.sections.display()))?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let tex_path = cli.output.join(format!("{}.tex", cli.jobname));
    fs::write(&tex_path, &document)
        .with_context(|| format!("failed to write {}", tex_path.display()))?;
    log::info!("LaTeX written: {}", tex_path.display());

    if !cli.tex_only {
        cvtex::compile_pdf(&tex_path, &cli.output, &cli.jobname, &config)?;
    }
    Ok(())
}
