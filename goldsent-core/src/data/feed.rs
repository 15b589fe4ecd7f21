//! Live volume / open interest feed over HTTP.
//!
//! The feed publishes one JSON entry per product and trading date, with counts
//! often formatted as strings ("248,000"). Entries are filtered to a single
//! product code; missing counts default to zero and price is never provided.

use std::time::Duration;

use serde::Deserialize;

use super::numeric::parse_count;
use super::provider::{DataError, DataProvider, DataSource, FetchResult};
use crate::domain::RawRecord;

/// Connection settings for [`FeedProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub url: String,
    pub product_code: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub base_delay: Duration,
}

/// Feed body: either a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedBody {
    List(Vec<FeedEntry>),
    Wrapped(FeedEnvelope),
}

#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    #[serde(alias = "records", alias = "items")]
    data: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    #[serde(rename = "productCode", alias = "product", alias = "code", default)]
    product_code: Option<String>,
    #[serde(alias = "tradeDate", alias = "month", default)]
    date: Option<String>,
    #[serde(alias = "totalVolume", default)]
    volume: Option<Count>,
    #[serde(rename = "openInterest", alias = "atClose", default)]
    open_interest: Option<Count>,
    #[serde(default)]
    deliveries: Option<Count>,
    #[serde(rename = "blockTrades", default)]
    block_trades: Option<Count>,
}

/// A count sent either as a JSON number or a formatted string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Count {
    Int(u64),
    Float(f64),
    Text(String),
}

impl Count {
    fn value(&self) -> Option<u64> {
        match self {
            Count::Int(v) => Some(*v),
            Count::Float(v) if v.is_finite() && *v >= 0.0 => Some(v.round() as u64),
            Count::Float(_) => None,
            Count::Text(s) => parse_count(s),
        }
    }
}

fn count_or_zero(count: Option<&Count>) -> u64 {
    count.and_then(Count::value).unwrap_or(0)
}

/// Fetches and filters the live feed.
pub struct FeedProvider {
    client: reqwest::blocking::Client,
    settings: FeedSettings,
}

impl FeedProvider {
    pub fn new(settings: FeedSettings) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("goldsent/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::NetworkUnreachable(format!("HTTP client setup: {e}")))?;
        Ok(Self { client, settings })
    }

    /// Decode a feed body and keep the entries for `product_code`.
    pub fn parse_body(body: &str, product_code: &str) -> Result<Vec<RawRecord>, DataError> {
        let parsed: FeedBody =
            serde_json::from_str(body).map_err(|e| DataError::MalformedFeed(e.to_string()))?;
        let entries = match parsed {
            FeedBody::List(entries) => entries,
            FeedBody::Wrapped(envelope) => envelope.data,
        };

        let records: Vec<RawRecord> = entries
            .iter()
            .filter(|e| {
                e.product_code
                    .as_deref()
                    .is_some_and(|code| code.trim().eq_ignore_ascii_case(product_code))
            })
            .filter_map(|e| {
                let Some(date) = e.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) else {
                    log::debug!("feed entry for {product_code} without a date skipped");
                    return None;
                };
                Some(RawRecord {
                    date: date.to_string(),
                    price: None,
                    volume: Some(count_or_zero(e.volume.as_ref())),
                    open_interest: Some(count_or_zero(e.open_interest.as_ref())),
                    oi_change: None,
                    deliveries: Some(count_or_zero(e.deliveries.as_ref())),
                    block_trades: Some(count_or_zero(e.block_trades.as_ref())),
                })
            })
            .collect();

        if records.is_empty() {
            return Err(DataError::ProductNotFound {
                product: product_code.to_string(),
            });
        }
        Ok(records)
    }

    fn request_once(&self) -> Result<String, DataError> {
        let resp = self
            .client
            .get(&self.settings.url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DataError::AccessDenied {
                status: status.as_u16(),
            });
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
            });
        }

        resp.text()
            .map_err(|e| DataError::MalformedFeed(format!("unreadable body: {e}")))
    }

    /// GET the feed, retrying transient failures with exponential backoff.
    fn fetch_with_retry(&self) -> Result<String, DataError> {
        let mut last_error = None;

        for attempt in 0..=self.settings.max_retries {
            if attempt > 0 {
                let delay = self
                    .settings
                    .base_delay
                    .saturating_mul(2u32.saturating_pow(attempt - 1));
                std::thread::sleep(delay);
            }

            match self.request_once() {
                Ok(body) => return Ok(body),
                Err(DataError::HttpStatus { status }) if status < 500 => {
                    return Err(DataError::HttpStatus { status });
                }
                Err(e) if e.is_retryable() => {
                    log::warn!(
                        "feed request failed (attempt {}/{}): {e}",
                        attempt + 1,
                        self.settings.max_retries + 1
                    );
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| DataError::NetworkUnreachable("no attempts made".into())))
    }
}

impl DataProvider for FeedProvider {
    fn name(&self) -> &str {
        "feed"
    }

    fn fetch(&self) -> Result<FetchResult, DataError> {
        let body = self.fetch_with_retry()?;
        let records = Self::parse_body(&body, &self.settings.product_code)?;
        log::info!(
            "feed: {} records for {}",
            records.len(),
            self.settings.product_code
        );
        Ok(FetchResult {
            records,
            source: DataSource::Feed,
        })
    }
}
