use std::time::Duration;

use applog_core::api::TargetConfig;
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};

use super::error::PlatformHttpError;
use super::query::LogQuery;
use super::source::HttpByteSource;

/// What the server answered to a log request.
pub enum LogResponse {
    /// 204: nothing to show yet. Not an error.
    NoContent,
    Stream(HttpByteSource),
}

#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    request_timeout: Duration,
}

impl PlatformClient {
    pub fn new(cfg: &TargetConfig) -> Result<Self, PlatformHttpError> {
        let base_url = Url::parse(cfg.url.trim())
            .map_err(|err| PlatformHttpError::invalid_url(&cfg.url, err))?;
        // No overall timeout here: follow sessions stay open indefinitely.
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .build()
            .map_err(|err| PlatformHttpError::from_reqwest(err, base_url.to_string()))?;
        Ok(Self {
            http,
            base_url,
            token: cfg.token.clone(),
            request_timeout: Duration::from_millis(cfg.request_timeout_ms),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.token.trim().is_empty() {
            req
        } else {
            req.header(AUTHORIZATION, format!("bearer {}", self.token))
        }
    }

    pub async fn open_log(&self, query: &LogQuery) -> Result<LogResponse, PlatformHttpError> {
        let url = query.url(&self.base_url)?;
        tracing::debug!(
            target: "applog.http",
            stage = "log.open.in",
            url = %url,
            follow = query.follow,
            lines = query.lines
        );

        let mut req = self.http.get(url.clone());
        if !query.follow {
            req = req.timeout(self.request_timeout);
        }
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| PlatformHttpError::from_reqwest(err, url.to_string()))?;

        let status = resp.status();
        tracing::debug!(target: "applog.http", stage = "log.open.out", status = %status);

        if status == StatusCode::NO_CONTENT {
            return Ok(LogResponse::NoContent);
        }
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|err| PlatformHttpError::from_reqwest(err, url.to_string()))?;
            return Err(PlatformHttpError::status_error(
                status.as_u16(),
                url.to_string(),
                &body,
            ));
        }

        Ok(LogResponse::Stream(HttpByteSource::new(resp)))
    }
}
