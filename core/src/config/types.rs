use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub target: TargetConfig,

    /// App name used when `--app` is not given.
    #[serde(default)]
    pub default_app: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL of the platform API, e.g. "https://platform.example.com".
    #[serde(default = "default_target_url")]
    pub url: String,

    /// Bearer token. Empty means unauthenticated requests.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Overall request timeout for bounded (non-follow) sessions.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_target_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_request_timeout_ms() -> u64 {
    60_000
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: default_target_url(),
            token: String::new(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves `Auto` against whether the sink is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Render timestamps in UTC instead of the local timezone.
    #[serde(default)]
    pub utc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "applog_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.target.url, "http://127.0.0.1:8080");
        assert!(cfg.target.token.is_empty());
        assert_eq!(cfg.target.connect_timeout_ms, 10_000);
        assert_eq!(cfg.output.color, ColorMode::Auto);
        assert!(!cfg.output.utc);
        assert!(cfg.logging.console);
        assert!(!cfg.logging.file);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
default_app = "billing"

[target]
url = "https://platform.example.com"

[output]
color = "never"
"#,
        )
        .unwrap();
        assert_eq!(cfg.default_app.as_deref(), Some("billing"));
        assert_eq!(cfg.target.url, "https://platform.example.com");
        assert_eq!(cfg.target.request_timeout_ms, 60_000);
        assert_eq!(cfg.output.color, ColorMode::Never);
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }
}
