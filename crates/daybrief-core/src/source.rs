use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::{ContentDocument, CoreError, IndexEntry, content, date, index};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where briefings come from.
///
/// The index is fetched once at startup; content is fetched per selected
/// date. `fetch_content` resolves the structured `{date}.json` document
/// first and falls back to the `{date}.md` markup blob — which one exists is
/// deployment-dependent.
pub trait BriefingSource: Send + Sync {
    /// Human-readable label for logs.
    fn name(&self) -> &str;

    fn fetch_index<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>, CoreError>> + Send + 'a>>;

    fn fetch_content<'a>(
        &'a self,
        day: NaiveDate,
    ) -> Pin<Box<dyn Future<Output = Result<ContentDocument, CoreError>> + Send + 'a>>;
}

/// Build a source for a briefing root: `http(s)://` roots go over the
/// network, anything else is treated as a local directory.
pub fn from_root(root: &str) -> Arc<dyn BriefingSource> {
    if root.starts_with("http://") || root.starts_with("https://") {
        Arc::new(HttpSource::new(root))
    } else {
        Arc::new(DirSource::new(root))
    }
}

/// Briefings served over HTTP from `<base>/briefings/`.
pub struct HttpSource {
    base: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl BriefingSource for HttpSource {
    fn name(&self) -> &str {
        &self.base
    }

    fn fetch_index<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>, CoreError>> + Send + 'a>> {
        let url = format!("{}/briefings/index.json", self.base);
        Box::pin(async move {
            let resp = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await?
                .error_for_status()?;
            let body = resp.text().await?;
            index::decode_index(&body)
        })
    }

    fn fetch_content<'a>(
        &'a self,
        day: NaiveDate,
    ) -> Pin<Box<dyn Future<Output = Result<ContentDocument, CoreError>> + Send + 'a>> {
        let iso = date::format_iso(day);
        let json_url = format!("{}/briefings/{}.json", self.base, iso);
        let md_url = format!("{}/briefings/{}.md", self.base, iso);
        Box::pin(async move {
            let resp = self
                .client
                .get(&json_url)
                .timeout(self.timeout)
                .send()
                .await?;
            if resp.status().is_success() {
                let body = resp.text().await?;
                match content::decode_structured(&body) {
                    Ok(doc) => return Ok(doc),
                    Err(e) => {
                        tracing::debug!(url = %json_url, error = %e, "structured decode failed, trying markup");
                    }
                }
            }

            let resp = self
                .client
                .get(&md_url)
                .timeout(self.timeout)
                .send()
                .await?;
            if !resp.status().is_success() {
                return Err(CoreError::NotFound(iso));
            }
            Ok(ContentDocument::Markup(resp.text().await?))
        })
    }
}

/// Briefings read from `<root>/briefings/` on the local filesystem.
/// Same layout as the HTTP deployment; used for file-based setups and tests.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn briefing_path(&self, file: &str) -> PathBuf {
        self.root.join("briefings").join(file)
    }
}

impl BriefingSource for DirSource {
    fn name(&self) -> &str {
        self.root.to_str().unwrap_or("<dir>")
    }

    fn fetch_index<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>, CoreError>> + Send + 'a>> {
        let path = self.briefing_path("index.json");
        Box::pin(async move {
            let body = tokio::fs::read_to_string(&path).await?;
            index::decode_index(&body)
        })
    }

    fn fetch_content<'a>(
        &'a self,
        day: NaiveDate,
    ) -> Pin<Box<dyn Future<Output = Result<ContentDocument, CoreError>> + Send + 'a>> {
        let iso = date::format_iso(day);
        let json_path = self.briefing_path(&format!("{iso}.json"));
        let md_path = self.briefing_path(&format!("{iso}.md"));
        Box::pin(async move {
            match tokio::fs::read_to_string(&json_path).await {
                Ok(body) => match content::decode_structured(&body) {
                    Ok(doc) => return Ok(doc),
                    Err(e) => {
                        tracing::debug!(path = %json_path.display(), error = %e, "structured decode failed, trying markup");
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }

            match tokio::fs::read_to_string(&md_path).await {
                Ok(body) => Ok(ContentDocument::Markup(body)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CoreError::NotFound(iso)),
                Err(e) => Err(e.into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_picks_http_for_urls() {
        assert_eq!(from_root("https://example.com/").name(), "https://example.com");
        assert_eq!(from_root("http://localhost:8080").name(), "http://localhost:8080");
    }

    #[test]
    fn from_root_picks_dir_otherwise() {
        assert_eq!(from_root("/var/briefings").name(), "/var/briefings");
        assert_eq!(from_root("./out").name(), "./out");
    }

    #[test]
    fn http_base_trailing_slash_trimmed() {
        let src = HttpSource::new("https://example.com///");
        assert_eq!(src.name(), "https://example.com");
    }
}
