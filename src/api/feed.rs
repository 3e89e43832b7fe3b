use crate::api::models::{
    FeedSource, NewsItem, TIME_PLACEHOLDER, URL_PLACEHOLDER, fallback_news,
};
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_ITEMS_PER_SOURCE: usize = 3;

/// Why a single source contributed nothing. Never escapes `fetch_one`.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("feed reported status {0:?}")]
    Status(String),
    #[error("response has no items")]
    NoItems,
}

// rss2json response structures
#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: Option<String>,
    items: Option<Vec<FeedEntry>>,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    title: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    link: Option<String>,
}

/// Relative age of `then` as seen from `now`.
///
/// Counts are truncated, and the unit is never singularized ("1 hours ago").
/// Timestamps in the future read as "0 min ago".
pub fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let diff_ms = (now - then).num_milliseconds().max(0);
    let mins = diff_ms / 60_000;
    let hours = diff_ms / 3_600_000;
    let days = diff_ms / 86_400_000;

    if mins < 60 {
        format!("{} min ago", mins)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format!("{} days ago", days)
    }
}

/// Parse a `pubDate` as emitted by rss2json ("2024-05-01 13:45:00", UTC),
/// accepting RFC 3339 and RFC 2822 as well.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn entry_time(pub_date: Option<&str>, now: DateTime<Utc>) -> String {
    pub_date
        .and_then(parse_pub_date)
        .map(|then| time_ago(now, then))
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

/// Decode one rss2json response body into at most `limit` items labelled `source`.
pub fn parse_feed_response(
    body: &[u8],
    source: &str,
    limit: usize,
    now: DateTime<Utc>,
) -> Result<Vec<NewsItem>, FeedError> {
    let response: FeedResponse = serde_json::from_slice(body)?;

    let status = response.status.unwrap_or_default();
    if status != "ok" {
        return Err(FeedError::Status(status));
    }
    let entries = response.items.ok_or(FeedError::NoItems)?;

    let items = entries
        .into_iter()
        .take(limit)
        .map(|entry| NewsItem {
            source: source.to_string(),
            headline: entry.title.unwrap_or_else(|| "(no title)".to_string()),
            time: entry_time(entry.pub_date.as_deref(), now),
            url: entry
                .link
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| URL_PLACEHOLDER.to_string()),
        })
        .collect();

    Ok(items)
}

/// Flatten per-source results and shuffle them together.
/// An empty merge yields the fallback set, unshuffled.
pub fn merge_results<R: Rng + ?Sized>(results: Vec<Vec<NewsItem>>, rng: &mut R) -> Vec<NewsItem> {
    let mut all: Vec<NewsItem> = results.into_iter().flatten().collect();
    if all.is_empty() {
        return fallback_news();
    }
    all.shuffle(rng);
    all
}

pub struct FeedClient {
    client: Client,
    endpoint: String,
    per_source_limit: usize,
}

impl FeedClient {
    pub fn new(endpoint: &str, per_source_limit: usize, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("newsticker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            per_source_limit,
        })
    }

    async fn try_fetch(&self, source: &FeedSource) -> Result<Vec<NewsItem>, FeedError> {
        let bytes = self
            .client
            .get(&self.endpoint)
            .query(&[("rss_url", source.url.as_str())])
            .send()
            .await?
            .bytes()
            .await?;

        parse_feed_response(&bytes, &source.source, self.per_source_limit, Utc::now())
    }

    /// Fetch one source. Any failure is logged and yields an empty list.
    pub async fn fetch_one(&self, source: &FeedSource) -> Vec<NewsItem> {
        match self.try_fetch(source).await {
            Ok(items) => {
                debug!(source = %source.source, count = items.len(), "feed fetched");
                items
            }
            Err(e) => {
                warn!(source = %source.source, url = %source.url, error = %e, "feed unavailable");
                Vec::new()
            }
        }
    }

    /// Fetch every source concurrently, then merge. Never empty.
    pub async fn fetch_all(&self, sources: &[FeedSource]) -> Vec<NewsItem> {
        let futures: Vec<_> = sources.iter().map(|s| self.fetch_one(s)).collect();
        let results = futures::future::join_all(futures).await;

        let live: usize = results.iter().map(Vec::len).sum();
        if live == 0 {
            warn!(sources = sources.len(), "no source produced items, using fallback news");
        } else {
            info!(sources = sources.len(), items = live, "news refreshed");
        }

        merge_results(results, &mut rand::thread_rng())
    }
}
