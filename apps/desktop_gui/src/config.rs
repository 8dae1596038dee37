use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

use crate::Args;

pub const DEFAULT_API_BASE_URL: &str = "https://chakra-python-backend.onrender.com";
pub const DEFAULT_TITLE: &str = "LinkedIn Profile Search";
const LOCAL_SETTINGS_FILE: &str = "profile_search.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
    pub title: String,
    pub logo_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout: None,
            title: DEFAULT_TITLE.into(),
            logo_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    title: Option<String>,
    logo_path: Option<PathBuf>,
}

/// Defaults, then the settings file, then environment, then command line.
pub fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            apply_file(&mut settings, &raw, path)?;
        }
        None => {
            if let Some(path) = default_settings_path() {
                if let Ok(raw) = fs::read_to_string(&path) {
                    apply_file(&mut settings, &raw, &path)?;
                }
            }
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    apply_args(&mut settings, args);
    Ok(settings)
}

fn default_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_SETTINGS_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir().map(|dir| dir.join("profile_search").join("settings.toml"))
}

fn apply_file(settings: &mut Settings, raw: &str, path: &Path) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout = timeout_from_secs(v);
    }
    if let Some(v) = file_cfg.title {
        settings.title = v;
    }
    if let Some(v) = file_cfg.logo_path {
        settings.logo_path = Some(v);
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| var(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = non_empty("SEARCH_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = non_empty("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout = timeout_from_secs(parsed),
            Err(err) => {
                tracing::warn!(value = %v, "ignoring APP__REQUEST_TIMEOUT_SECS: {err}");
            }
        }
    }

    if let Some(v) = non_empty("APP__TITLE") {
        settings.title = v;
    }
    if let Some(v) = non_empty("APP__LOGO_PATH") {
        settings.logo_path = Some(PathBuf::from(v));
    }
}

fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(v) = &args.api_base_url {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = args.request_timeout_secs {
        settings.request_timeout = timeout_from_secs(v);
    }
    if let Some(v) = &args.title {
        settings.title = v.clone();
    }
    if let Some(v) = &args.logo_path {
        settings.logo_path = Some(v.clone());
    }
}

/// Zero disables the timeout.
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
