use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub links: LinksConfig,
    pub header: HeaderConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub paper: String,
    pub font_size: String,
    pub margin: String,
    pub numbers: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            paper: "a4paper".to_string(),
            font_size: "11pt".to_string(),
            margin: "1in".to_string(),
            numbers: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub color: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
        }
    }
}

/// Controls the centered contact header rebuilt from the section that lists
/// name, location, and contact details.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub section: String,
    pub contacts_per_line: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            section: "Personal Information".to_string(),
            contacts_per_line: 3,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub engine: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            engine: "pdflatex".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("ignoring invalid config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
