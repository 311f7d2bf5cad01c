use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("stream failed: {0}")]
    Stream(#[from] StreamError),
    #[error("config error: {0}")]
    Config(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Fatal session failures. Undecodable trailing bytes are not an error; they
/// come back in [`crate::stream::StreamOutcome::unparsed`].
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("transport read failed: {0}")]
    Transport(String),
    #[error("sink write failed: {0}")]
    Sink(#[source] std::io::Error),
}

impl StreamError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}
