use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default applog data directory: ~/.applog
pub fn get_applog_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".applog"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.applog/config.toml (highest)
    let user_config = get_applog_data_dir()?.join("config.toml");

    // Priority 2: ./applog.toml (current directory)
    let local_config = Path::new("applog.toml");

    let mut cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    // Environment variable overrides (Priority 0: highest)
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());

    tracing::debug!(target: "applog.config", url = %cfg.target.url, "config loaded");
    Ok(cfg)
}

/// Applies `APPLOG_*` overrides; blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("APPLOG_TARGET") {
        cfg.target.url = v;
    }
    if let Some(v) = get("APPLOG_TOKEN") {
        cfg.target.token = v;
    }
    if let Some(v) = get("APPLOG_APP") {
        cfg.default_app = Some(v);
    }
}
