#![allow(dead_code)]

use chrono::{Duration, Utc};
use newsticker::api::{FeedSource, NewsItem};
use newsticker::app::App;
use newsticker::config::Config;
use serde_json::{Value, json};

pub fn make_news_item(source: &str, headline: &str) -> NewsItem {
    NewsItem::new(source, headline, "5 min ago", &format!("https://{}.test/{}", source, headline))
}

// Creates a default App instance for testing (no file I/O).
pub fn test_app() -> App {
    App::with_config(Config::test_config()).unwrap()
}

pub fn test_config_for(endpoint: &str, feeds: Vec<FeedSource>) -> Config {
    let mut config = Config::test_config();
    config.proxy_endpoint = endpoint.to_string();
    config.feeds = feeds;
    config
}

/// rss2json-shaped body with `count` entries published `hours_ago` hours back.
pub fn feed_body(prefix: &str, count: usize, hours_ago: i64) -> Value {
    let published = (Utc::now() - Duration::hours(hours_ago))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("{} story {}", prefix, i),
                "pubDate": published,
                "link": format!("https://{}.test/{}", prefix, i),
                "guid": format!("{}-{}", prefix, i),
                "author": "",
                "categories": []
            })
        })
        .collect();
    json!({
        "status": "ok",
        "feed": { "url": format!("https://{}.test/rss", prefix), "title": prefix },
        "items": items
    })
}
