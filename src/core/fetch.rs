use crate::utils::error::{HolidayError, Result};
use reqwest::Client;

/// 內閣府公開的祝日 CSV
pub const HOLIDAY_CSV_URL: &str = "https://www8.cao.go.jp/chosei/shukujitsu/syukujitsu.csv";

/// Downloads the raw holiday CSV in a single request.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the complete response body. Non-success statuses are errors.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(HolidayError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(HOLIDAY_CSV_URL)
    }
}
