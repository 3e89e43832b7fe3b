pub mod feed;
pub mod models;

pub use feed::{FeedClient, FeedError};
pub use models::{FeedSource, NewsItem, fallback_news};
