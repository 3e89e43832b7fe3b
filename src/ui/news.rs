use super::formatters::truncate_str;
use crate::api::NewsItem;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

struct ColumnDef {
    name: &'static str,
    width: u16,
    priority: u8,
}

const NEWS_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "Time",
        width: 14,
        priority: 1,
    },
    ColumnDef {
        name: "Source",
        width: 14,
        priority: 2,
    },
    ColumnDef {
        name: "Headline",
        width: 40,
        priority: 1,
    },
    ColumnDef {
        name: "Link",
        width: 40,
        priority: 3,
    },
];
const HEADLINE_COLUMN: usize = 2;

/// Widest set of columns that fits, dropping higher priority numbers first.
fn visible_columns(available_width: u16) -> Vec<usize> {
    let max_priority = NEWS_COLUMNS.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = NEWS_COLUMNS
        .iter()
        .enumerate()
        .filter(|(_, c)| c.priority == 1)
        .map(|(i, _)| i)
        .collect();
    for cutoff in 2..=max_priority {
        let candidate: Vec<usize> = NEWS_COLUMNS
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= cutoff)
            .map(|(i, _)| i)
            .collect();
        let total: u16 = candidate.iter().map(|&i| NEWS_COLUMNS[i].width).sum();
        if total > available_width {
            break;
        }
        visible = candidate;
    }
    visible
}

fn news_row(i: usize, item: &NewsItem, vis: &[usize], selected: usize) -> Row<'static> {
    let is_selected = i == selected;
    let text_style = if is_selected {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };

    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| match col {
            0 => Cell::from(item.time.clone()).style(Style::default().fg(Color::DarkGray)),
            1 => Cell::from(truncate_str(&item.source, 13)).style(Style::default().fg(Color::Cyan)),
            2 => Cell::from(item.headline.clone()).style(text_style.add_modifier(Modifier::BOLD)),
            3 => {
                let link = if item.has_link() { item.url.as_str() } else { "" };
                Cell::from(link.to_string()).style(Style::default().fg(Color::Blue))
            }
            _ => Cell::from(""),
        })
        .collect();

    let row_style = if is_selected {
        Style::default().bg(Color::Rgb(40, 60, 100))
    } else {
        Style::default()
    };
    Row::new(cells).style(row_style)
}

pub fn draw_news(frame: &mut Frame, area: Rect, app: &App) {
    let vis = visible_columns(area.width.saturating_sub(2));

    let header = Row::new(
        vis.iter()
            .map(|&i| Cell::from(NEWS_COLUMNS[i].name))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| news_row(i, item, &vis, app.selected_index))
        .collect();

    let constraints: Vec<Constraint> = vis
        .iter()
        .map(|&i| {
            if i == HEADLINE_COLUMN {
                Constraint::Min(NEWS_COLUMNS[i].width)
            } else {
                Constraint::Length(NEWS_COLUMNS[i].width)
            }
        })
        .collect();

    let title = if app.loading {
        " Headlines [Loading...] ".to_string()
    } else {
        format!(" Headlines ({}) ", app.items.len())
    };

    let table = Table::new(rows, constraints)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
