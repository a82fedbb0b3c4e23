use crate::TickerSource;
use async_trait::async_trait;
use common::{
    models::{CoinList, CoinRecord},
    Error, Result,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

pub const COINLORE_TICKERS_URL: &str = "https://api.coinlore.net/api/tickers/";

/// Upstream request timeout. The API specifies none; an unbounded wait would
/// block the caller indefinitely on a stalled connection.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CoinloreConnector {
    client: reqwest::Client,
    tickers_url: String,
    timeout: Duration,
}

impl CoinloreConnector {
    pub fn new() -> Self {
        Self::with_tickers_url(COINLORE_TICKERS_URL.to_string())
    }

    pub fn with_tickers_url(tickers_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            tickers_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the raw response body from `url`.
    ///
    /// Fails with `InvalidRequest` before any I/O if the URL is empty or not
    /// absolute. Transport failures, non-2xx statuses and empty bodies all
    /// surface as `NetworkError`; the connection is released on every path.
    /// No retry is attempted, the caller decides what to do with a failure.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::InvalidRequest("empty URL".to_string()));
        }

        let url = reqwest::Url::parse(url)
            .map_err(|e| Error::InvalidRequest(format!("malformed URL {:?}: {}", url, e)))?;

        debug!("Fetching tickers from {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Coinlore API error: {} - {}", status, error_text);
            return Err(Error::NetworkError(format!(
                "Coinlore API error: {}",
                status
            )));
        }

        let body = response.text().await?;

        if body.is_empty() {
            return Err(Error::NetworkError("empty response body".to_string()));
        }

        Ok(body)
    }
}

impl Default for CoinloreConnector {
    fn default() -> Self {
        Self::new()
    }
}

// Wire shape of the Coinlore tickers endpoint. Only the fields we keep are
// declared; serde ignores the rest (rank, market cap, supply, ...).
#[derive(Debug, Deserialize)]
struct TickersPayload {
    data: Vec<RawTicker>,
}

#[derive(Debug, Deserialize)]
struct RawTicker {
    symbol: String,
    name: String,
    price_usd: String,
    percent_change_24h: String,
    percent_change_1h: String,
}

/// Parse a Coinlore tickers payload into a `CoinList`.
///
/// All-or-nothing: invalid JSON, a missing or non-array `data` key, or any
/// element missing a required string field fails the whole parse with zero
/// records. No element is skipped, no partial list is produced. List order
/// matches the `data` array.
pub fn parse_tickers(payload: &str) -> Result<CoinList> {
    let payload: TickersPayload = serde_json::from_str(payload)
        .map_err(|e| Error::ParseError(format!("invalid tickers payload: {}", e)))?;

    let coins = payload
        .data
        .into_iter()
        .map(|raw| CoinRecord {
            symbol: raw.symbol,
            name: raw.name,
            price_usd: raw.price_usd,
            change_24h: raw.percent_change_24h,
            change_1h: raw.percent_change_1h,
        })
        .collect();

    Ok(coins)
}

#[async_trait]
impl TickerSource for CoinloreConnector {
    async fn fetch_tickers(&self) -> Result<CoinList> {
        let body = self.fetch(&self.tickers_url).await?;
        parse_tickers(&body)
    }
}
