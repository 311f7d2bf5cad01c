use std::{error::Error as StdError, fmt};

const BODY_PREVIEW_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformHttpErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Status,
    Url,
    Unknown,
}

impl PlatformHttpErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Status => "status",
            Self::Url => "url",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlatformHttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct PlatformHttpError {
    kind: PlatformHttpErrorKind,
    status: Option<u16>,
    url: Option<String>,
    message: String,
    source: Option<anyhow::Error>,
}

impl PlatformHttpError {
    pub fn kind(&self) -> PlatformHttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, url: String) -> Self {
        let kind = if err.is_timeout() {
            PlatformHttpErrorKind::Timeout
        } else if err.is_connect() {
            PlatformHttpErrorKind::Connect
        } else if err.is_request() {
            PlatformHttpErrorKind::Request
        } else if err.is_body() {
            PlatformHttpErrorKind::Body
        } else {
            PlatformHttpErrorKind::Unknown
        };
        let status = err.status().map(|s| s.as_u16());
        let message = err.to_string();
        PlatformHttpError {
            kind,
            status,
            url: Some(url),
            message,
            source: Some(anyhow::Error::new(err)),
        }
    }

    pub(crate) fn status_error(status: u16, url: String, body: &str) -> Self {
        PlatformHttpError {
            kind: PlatformHttpErrorKind::Status,
            status: Some(status),
            url: Some(url),
            message: preview_body(body),
            source: None,
        }
    }

    pub(crate) fn invalid_url(url: &str, err: impl fmt::Display) -> Self {
        PlatformHttpError {
            kind: PlatformHttpErrorKind::Url,
            status: None,
            url: Some(url.to_string()),
            message: format!("invalid target url: {err}"),
            source: None,
        }
    }
}

impl fmt::Display for PlatformHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform http error kind={}", self.kind)?;
        if let Some(status) = self.status {
            write!(f, " status={}", status)?;
        }
        if let Some(url) = &self.url {
            write!(f, " url={}", url)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl StdError for PlatformHttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

fn preview_body(body: &str) -> String {
    match body.trim() {
        "" => "<empty body>".to_string(),
        text => match text.char_indices().nth(BODY_PREVIEW_LIMIT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        },
    }
}
