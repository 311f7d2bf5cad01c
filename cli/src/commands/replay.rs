use std::io::Write;

use applog_core::api::{run_stream, CliError, ReaderSource, RecordFormatter, StreamOutcome};
use tokio::io::AsyncRead;

use super::cli::ReplayArgs;

type BoxedReader = Box<dyn AsyncRead + Unpin + Send>;

async fn open_input(file: Option<&str>) -> Result<BoxedReader, CliError> {
    match file {
        None | Some("-") => Ok(Box::new(tokio::io::stdin())),
        Some(path) => {
            let f = tokio::fs::File::open(path).await.map_err(|e| {
                CliError::Io(std::io::Error::new(e.kind(), format!("open {path}: {e}")))
            })?;
            Ok(Box::new(f))
        }
    }
}

/// Runs a captured response body through the same pipeline as a live session.
pub async fn run_replay<W>(
    args: &ReplayArgs,
    formatter: &RecordFormatter,
    sink: &mut W,
) -> Result<StreamOutcome, CliError>
where
    W: Write + ?Sized,
{
    let reader = open_input(args.file.as_deref()).await?;
    let mut source = ReaderSource::new(reader);
    Ok(run_stream(&mut source, sink, formatter).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use applog_core::api::Zone;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn replays_saved_body_with_trailing_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}\nunparseable data",
            r#"[{"Date":"2015-03-10T14:02:11Z","Message":"creating app lost","Source":"tsuru","Unit":"api"}]"#
        )
        .unwrap();

        let args = ReplayArgs {
            file: Some(file.path().to_string_lossy().to_string()),
        };
        let mut out = Vec::new();
        let outcome = run_replay(&args, &RecordFormatter::plain(Zone::utc()), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2015-03-10 14:02:11 +0000 [tsuru][api]: creating app lost\nError: unparseable data"
        );
        assert_eq!(outcome.records, 1);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let args = ReplayArgs {
            file: Some("/definitely/not/here.json".to_string()),
        };
        let mut out = Vec::new();
        let err = run_replay(&args, &RecordFormatter::plain(Zone::utc()), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
