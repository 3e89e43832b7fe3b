use crate::api::NewsItem;

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len.saturating_sub(3))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

/// One line of `--plain` output: `[Source] Headline (time) url`.
/// The link is omitted when the item has none.
pub fn format_plain_line(item: &NewsItem) -> String {
    if item.has_link() {
        format!("[{}] {} ({}) {}", item.source, item.headline, item.time, item.url)
    } else {
        format!("[{}] {} ({})", item.source, item.headline, item.time)
    }
}
