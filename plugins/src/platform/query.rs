use reqwest::Url;

use super::error::PlatformHttpError;

pub const DEFAULT_LINES: u32 = 10;

/// Parameters of one log request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub app: String,
    pub lines: u32,
    pub source: Option<String>,
    pub unit: Option<String>,
    /// Keep the connection open and stream new entries as they are produced.
    pub follow: bool,
}

impl LogQuery {
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            lines: DEFAULT_LINES,
            source: None,
            unit: None,
            follow: false,
        }
    }

    /// `{base}/apps/{app}/log?lines=N[&source=S][&unit=U][&follow=1]`
    pub fn url(&self, base: &Url) -> Result<Url, PlatformHttpError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| PlatformHttpError::invalid_url(base.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(["apps", self.app.as_str(), "log"]);

        {
            let mut q = url.query_pairs_mut();
            q.append_pair("lines", &self.lines.to_string());
            if let Some(source) = self.source.as_deref().filter(|s| !s.is_empty()) {
                q.append_pair("source", source);
            }
            if let Some(unit) = self.unit.as_deref().filter(|s| !s.is_empty()) {
                q.append_pair("unit", unit);
            }
            if self.follow {
                q.append_pair("follow", "1");
            }
        }
        Ok(url)
    }
}
