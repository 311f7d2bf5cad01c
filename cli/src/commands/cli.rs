use applog_core::api::{AppConfig, ColorMode};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "applog", version, about = "Show application logs streamed from the platform")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Colorize the record prefix. Defaults to the configured mode.
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorChoice>,

    /// Render timestamps in UTC instead of the local timezone.
    #[arg(long, global = true)]
    pub utc: bool,
}

impl Args {
    /// Command-line flags take precedence over config and environment.
    pub fn apply_overrides(&self, cfg: &mut AppConfig) {
        if let Some(color) = self.color {
            cfg.output.color = color.into();
        }
        if self.utc {
            cfg.output.utc = true;
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AppLogArgs {
    /// The name of the app.
    #[arg(short = 'a', long)]
    pub app: Option<String>,

    /// The number of log lines to display.
    #[arg(short = 'l', long, default_value_t = 10)]
    pub lines: u32,

    /// The log from the given source (e.g. app, tsuru).
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// The log from the given unit.
    #[arg(short = 'u', long)]
    pub unit: Option<String>,

    /// Follow logs: wait for additional log output.
    #[arg(short = 'f', long)]
    pub follow: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReplayArgs {
    /// Saved response body to render. Reads stdin when absent or `-`.
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shows log entries for an application.
    AppLog(AppLogArgs),
    /// Renders a captured log response body.
    Replay(ReplayArgs),
}
