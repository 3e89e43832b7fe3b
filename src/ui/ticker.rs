use crate::api::NewsItem;
use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SEPARATOR: &str = "   ◆   ";

fn segment_spans(item: &NewsItem) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", item.source.to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            item.headline.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(item.time.clone(), Style::default().fg(Color::DarkGray)),
        Span::styled(SEPARATOR, Style::default().fg(Color::Yellow)),
    ]
}

fn segment_width(item: &NewsItem) -> usize {
    segment_spans(item).iter().map(Span::width).sum()
}

/// Width in columns of one pass over `items`.
pub fn cycle_width(items: &[NewsItem]) -> usize {
    items.iter().map(segment_width).sum()
}

/// The item whose segment covers column `offset` of the strip.
pub fn leading_item(items: &[NewsItem], offset: usize) -> Option<&NewsItem> {
    let mut end = 0;
    for item in items {
        end += segment_width(item);
        if offset < end {
            return Some(item);
        }
    }
    items.first()
}

pub fn strip_line(items: &[&NewsItem]) -> Line<'static> {
    Line::from(
        items
            .iter()
            .flat_map(|item| segment_spans(item))
            .collect::<Vec<_>>(),
    )
}

pub fn draw_ticker(frame: &mut Frame, area: Rect, app: &App) {
    let indicator = if app.paused { " ⏸ Paused " } else { " ▶ Live " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI News ")
        .title_bottom(Line::from(Span::styled(
            indicator,
            Style::default().fg(if app.paused { Color::Yellow } else { Color::Green }),
        )));

    let paragraph = if app.loading {
        Paragraph::new(Line::from(Span::styled(
            " ⟳ Loading latest AI news...",
            Style::default().fg(Color::Cyan),
        )))
    } else {
        let offset = u16::try_from(app.offset).unwrap_or(u16::MAX);
        Paragraph::new(strip_line(&app.display_items())).scroll((0, offset))
    };

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, headline: &str) -> NewsItem {
        NewsItem::new(source, headline, "5 min ago", "#")
    }

    #[test]
    fn cycle_width_sums_segments() {
        let items = vec![item("A", "one"), item("B", "two")];
        let expected = segment_width(&items[0]) + segment_width(&items[1]);
        assert_eq!(cycle_width(&items), expected);
        assert_eq!(cycle_width(&[]), 0);
    }

    #[test]
    fn leading_item_tracks_offset() {
        let items = vec![item("A", "one"), item("B", "two")];
        let first = segment_width(&items[0]);
        assert_eq!(leading_item(&items, 0).unwrap().source, "A");
        assert_eq!(leading_item(&items, first - 1).unwrap().source, "A");
        assert_eq!(leading_item(&items, first).unwrap().source, "B");
        assert!(leading_item(&[], 3).is_none());
    }
}
