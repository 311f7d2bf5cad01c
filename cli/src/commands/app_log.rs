use std::io::Write;

use applog_core::api::{run_stream, AppConfig, CliError, RecordFormatter, StreamOutcome};
use applog_plugins::platform::{
    LogQuery, LogResponse, PlatformClient, PlatformHttpError, PlatformHttpErrorKind,
};

use super::cli::AppLogArgs;

/// `--app`, else the configured/env default. Guessing from local project
/// state is not attempted.
pub fn resolve_app(args: &AppLogArgs, cfg: &AppConfig) -> Result<String, CliError> {
    args.app
        .as_deref()
        .or(cfg.default_app.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::Config(
                "no app name given: pass --app, set default_app or APPLOG_APP".to_string(),
            )
        })
}

pub fn build_query(args: &AppLogArgs, app: String) -> LogQuery {
    LogQuery {
        app,
        lines: args.lines,
        source: args.source.clone(),
        unit: args.unit.clone(),
        follow: args.follow,
    }
}

fn http_error(err: PlatformHttpError) -> CliError {
    match err.kind() {
        PlatformHttpErrorKind::Url => CliError::Config(err.to_string()),
        _ => CliError::Transport(err.to_string()),
    }
}

#[tracing::instrument(name = "cli.app_log", skip_all, fields(follow = args.follow))]
pub async fn run_app_log<W>(
    args: &AppLogArgs,
    cfg: &AppConfig,
    formatter: &RecordFormatter,
    sink: &mut W,
) -> Result<StreamOutcome, CliError>
where
    W: Write + ?Sized,
{
    let app = resolve_app(args, cfg)?;
    let query = build_query(args, app);
    let client = PlatformClient::new(&cfg.target).map_err(http_error)?;

    match client.open_log(&query).await.map_err(http_error)? {
        LogResponse::NoContent => {
            tracing::debug!(app = %query.app, "no content");
            Ok(StreamOutcome::no_content())
        }
        LogResponse::Stream(mut source) => Ok(run_stream(&mut source, sink, formatter).await?),
    }
}
