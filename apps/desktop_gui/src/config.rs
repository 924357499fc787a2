use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::protocol::DEFAULT_FACT_API_URL;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "fact_widget.toml";
pub const DEFAULT_WINDOW_TITLE: &str = "Random Cat Fact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Url,
    pub window_title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    endpoint: Option<String>,
    window_title: Option<String>,
}

/// Command-line overrides; highest precedence.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_path: Option<std::path::PathBuf>,
    pub endpoint: Option<String>,
    pub window_title: Option<String>,
}

/// Resolves settings from defaults, then the TOML file, then the
/// environment, then `overrides`.
pub fn load_settings(overrides: &Overrides) -> anyhow::Result<Settings> {
    let file_text = match &overrides.config_path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?,
        ),
        None => read_optional(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    resolve_settings(file_text.as_deref(), |name| std::env::var(name).ok(), overrides)
}

fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading config file {}", path.display())),
    }
}

pub(crate) fn resolve_settings(
    file_text: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
    overrides: &Overrides,
) -> anyhow::Result<Settings> {
    let mut endpoint = DEFAULT_FACT_API_URL.to_string();
    let mut window_title = DEFAULT_WINDOW_TITLE.to_string();

    if let Some(raw) = file_text {
        let file: FileSettings = toml::from_str(raw).context("parsing config file")?;
        if let Some(v) = file.endpoint {
            endpoint = v;
        }
        if let Some(v) = file.window_title {
            window_title = v;
        }
    }

    for name in ["FACT_API_URL", "APP__FACT_API_URL"] {
        if let Some(v) = env(name).filter(|v| !v.trim().is_empty()) {
            endpoint = v;
        }
    }
    if let Some(v) = env("APP__WINDOW_TITLE").filter(|v| !v.trim().is_empty()) {
        window_title = v;
    }

    if let Some(v) = &overrides.endpoint {
        endpoint = v.clone();
    }
    if let Some(v) = &overrides.window_title {
        window_title = v.clone();
    }

    Ok(Settings {
        endpoint: parse_endpoint(&endpoint)?,
        window_title,
    })
}

pub fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid fact endpoint '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("fact endpoint must be http or https, got '{other}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
