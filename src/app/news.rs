use chrono::Local;
use tokio::time::Instant;

use super::App;
use crate::api::{FeedSource, fallback_news};

impl App {
    /// Set `loading = true` and return the sources to fetch.
    pub fn prepare_refresh(&mut self) -> Vec<FeedSource> {
        self.loading = true;
        self.status_message = None;
        self.config.feeds.clone()
    }

    /// Fetch every source, replace the displayed items and clear `loading`.
    pub async fn execute_refresh(&mut self, sources: &[FeedSource]) {
        let items = self.client.fetch_all(sources).await;
        if items == fallback_news() {
            self.status_message = Some("Feeds unavailable, showing fallback headlines".to_string());
        }
        self.render(items);
        self.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
        self.last_refresh = Some(Instant::now());
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        let sources = self.prepare_refresh();
        self.execute_refresh(&sources).await;
    }

    /// True until the first refresh has completed.
    pub fn needs_initial_load(&self) -> bool {
        self.last_refresh.is_none()
    }

    /// True once the configured auto-refresh interval has elapsed.
    pub fn refresh_due(&self) -> bool {
        match (self.config.refresh_interval(), self.last_refresh) {
            (Some(interval), Some(last)) => last.elapsed() >= interval,
            _ => false,
        }
    }
}
