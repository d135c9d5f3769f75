use super::transport_error;
use crate::domain::error::FetchError;
use crate::domain::ports::table_source::TableSource;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_URL: &str =
    "http://www2.bmf.com.br/pages/portal/bmfbovespa/lumis/lum-ajustes-do-pregao-ptBR.asp";

/// B3 (former BM&F) "ajustes do pregão" page. Public, no auth required.
pub struct B3SettlementFeed {
    url: String,
    client: reqwest::Client,
}

impl B3SettlementFeed {
    /// Fails if the HTTP client cannot be built; a client without the
    /// timeout is never substituted.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                 AppleWebKit/537.36 (KHTML, like Gecko) \
                 Chrome/120.0.0.0 Safari/537.36",
            )
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TableSource for B3SettlementFeed {
    fn name(&self) -> &str {
        "b3_ajustes"
    }

    async fn fetch_raw_table(&self) -> Result<Vec<u8>, FetchError> {
        debug!(url = %self.url, "fetching settlement page");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "settlement page returned non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(transport_error)?;
        debug!(bytes = body.len(), "settlement page received");
        Ok(body.to_vec())
    }
}
