use crate::error::PipelineError;

/// Plain GET against the search page. Default client settings: no custom
/// headers, no timeout override, no retries.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Fetcher {
        Fetcher {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_page(&self, url: &str) -> Result<String, PipelineError> {
        log::debug!("fetching {url}");
        let res = self.client.get(url).send().await?.error_for_status()?;
        let body = res.text().await?;
        log::debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
