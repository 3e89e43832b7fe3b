mod news;

use crate::api::{FeedClient, NewsItem};
use crate::config::Config;
use anyhow::Result;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub config: Config,
    /// Items currently on display; replaced wholesale by `render`
    pub items: Vec<NewsItem>,
    pub paused: bool,
    pub loading: bool,
    /// Ticker scroll position, in columns, within one copy of the strip
    pub offset: usize,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub status_message: Option<String>,
    pub last_updated: Option<String>,
    pub last_refresh: Option<Instant>,
    client: FeedClient,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = FeedClient::new(
            &config.proxy_endpoint,
            config.max_items_per_source,
            config.request_timeout(),
        )?;
        Ok(Self {
            config,
            items: Vec::new(),
            paused: false,
            loading: false,
            offset: 0,
            selected_index: 0,
            input_mode: InputMode::Normal,
            status_message: None,
            last_updated: None,
            last_refresh: None,
            client,
        })
    }

    /// Replace everything on display with `items`.
    pub fn render(&mut self, items: Vec<NewsItem>) {
        self.items = items;
        self.offset = 0;
        if self.selected_index >= self.items.len() {
            self.selected_index = 0;
        }
    }

    /// The sequence handed to the ticker strip: the items twice over, so the
    /// scroll can wrap without a visible seam.
    pub fn display_items(&self) -> Vec<&NewsItem> {
        self.items.iter().chain(self.items.iter()).collect()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance the ticker one column. `cycle` is the width of one copy of the strip.
    pub fn tick(&mut self, cycle: usize) {
        if self.paused || cycle == 0 {
            return;
        }
        self.offset = (self.offset + 1) % cycle;
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.items.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.items.get(self.selected_index)
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
