use serde::{Deserialize, Serialize};

/// Placeholder shown when an item carries no usable publish date.
pub const TIME_PLACEHOLDER: &str = "Recently";

/// Link target used when an item has no link.
pub const URL_PLACEHOLDER: &str = "#";

/// A single headline as displayed in the ticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String,
    pub headline: String,
    pub time: String,
    pub url: String,
}

impl NewsItem {
    pub fn new(source: &str, headline: &str, time: &str, url: &str) -> Self {
        Self {
            source: source.to_string(),
            headline: headline.to_string(),
            time: time.to_string(),
            url: url.to_string(),
        }
    }

    pub fn has_link(&self) -> bool {
        self.url != URL_PLACEHOLDER && !self.url.is_empty()
    }
}

/// A configured feed: where to fetch it and how to label its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub url: String,
    pub source: String,
}

impl FeedSource {
    pub fn new(url: &str, source: &str) -> Self {
        Self {
            url: url.to_string(),
            source: source.to_string(),
        }
    }
}

/// Shown in place of live news when no source produced anything.
pub fn fallback_news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "AI News",
            "Latest developments in artificial intelligence and machine learning",
            TIME_PLACEHOLDER,
            URL_PLACEHOLDER,
        ),
        NewsItem::new(
            "Tech Update",
            "Enterprise AI adoption continues to accelerate across industries",
            TIME_PLACEHOLDER,
            URL_PLACEHOLDER,
        ),
        NewsItem::new(
            "AI Research",
            "New breakthroughs in multimodal AI models show promise",
            TIME_PLACEHOLDER,
            URL_PLACEHOLDER,
        ),
    ]
}
