pub mod formatters;
mod modals;
mod news;
pub mod ticker;

use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    ticker::draw_ticker(frame, chunks[1], app);
    news::draw_news(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.loading {
        "[Loading...]".to_string()
    } else {
        match &app.last_updated {
            Some(t) => format!("[Updated {}]", t),
            None => String::new(),
        }
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" News Ticker ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} feeds", app.config.feeds.len()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [p] Pause [r] Refresh [↑↓] Nav [?] Help [q] Quit ";
            let leading = ticker::leading_item(&app.items, app.offset)
                .filter(|item| item.has_link())
                .map(|item| item.url.clone());
            let mut spans = Vec::new();
            if let Some(msg) = &app.status_message {
                spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" | "));
            }
            if let Some(url) = leading {
                spans.push(Span::styled(url, Style::default().fg(Color::Blue)));
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));
            Line::from(spans)
        }
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
