use std::io::Write;

use applog_cli::commands::{app_log, cli, replay};
use applog_cli::output::{formatter_for, stdout_is_terminal};
use applog_core::api::{AppConfig, CliError, LoggingConfig, StreamError, StreamOutcome};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg =
        applog_core::api::load_default().map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;
    args.apply_overrides(&mut cfg);

    tokio::select! {
        res = dispatch(&args.command, &cfg) => res,
        () = wait_for_interrupt(tokio::signal::ctrl_c()) => {
            tracing::debug!("interrupted");
            Ok(EXIT_INTERRUPTED)
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler could not be installed,
/// so the session keeps running uninterruptible instead of ending early.
async fn wait_for_interrupt<S>(signal: S)
where
    S: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success (no content and trailing diagnostics included)
    // 11: config error
    // 20: transport / IO error
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Stream(StreamError::Transport(_)) => 20,
        CliError::Stream(StreamError::Sink(_)) => 20,
        CliError::Transport(_) => 20,
        CliError::Io(_) => 20,
        CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(cmd: &cli::Commands, cfg: &AppConfig) -> Result<i32, CliError> {
    let formatter = formatter_for(&cfg.output, stdout_is_terminal());
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    let outcome: StreamOutcome = match cmd {
        cli::Commands::AppLog(a) => app_log::run_app_log(a, cfg, &formatter, &mut sink).await?,
        cli::Commands::Replay(r) => replay::run_replay(r, &formatter, &mut sink).await?,
    };
    // The stream already flushed after every line.
    if let Err(e) = sink.flush() {
        tracing::debug!(error = %e, "final stdout flush failed");
    }

    tracing::debug!(
        records = outcome.records,
        unparsed = outcome.unparsed.len(),
        sink_closed = outcome.sink_closed,
        "session done"
    );
    Ok(0)
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("applog"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("applog.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    // stdout carries the record stream; diagnostics only ever go to stderr.
    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn interrupt_fires_on_ctrl_c() {
        let fired = async { Ok::<(), std::io::Error>(()) };
        tokio::time::timeout(Duration::from_secs(1), wait_for_interrupt(fired))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_handler_registration_never_interrupts() {
        let failed = async { Err::<(), _>(std::io::Error::other("no signal driver")) };
        let res = tokio::time::timeout(Duration::from_millis(50), wait_for_interrupt(failed)).await;
        assert!(res.is_err());
    }

    #[test]
    fn exit_codes_by_error_class() {
        assert_eq!(exit_code_for_error(&CliError::Config("x".into())), 11);
        assert_eq!(
            exit_code_for_error(&CliError::Stream(StreamError::Transport("reset".into()))),
            20
        );
        assert_eq!(exit_code_for_error(&CliError::Anyhow(anyhow::anyhow!("boom"))), 50);
    }
}
