mod listing;

pub use listing::parse_listing;

use newscraft_core::domain::ListingPage;
use newscraft_core::errors::FetchError;
use newscraft_core::ports::ListingSource;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!("newscraft/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of the ListingSource trait
pub struct HttpListingSource {
    client: Client,
}

impl HttpListingSource {
    /// Creates a new HttpListingSource with the given request timeout
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ListingSource for HttpListingSource {
    fn fetch_page(&self, url: &Url) -> Result<ListingPage, FetchError> {
        let transport = |err: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            reason: err.to_string(),
        };

        debug!(url = %url, "fetching listing page");
        let response = self.client.get(url.clone()).send().map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        Ok(parse_listing(&body))
    }
}
