mod common;

use common::{make_news_item, test_app};
use newsticker::api::fallback_news;
use newsticker::app::InputMode;

fn three_items() -> Vec<newsticker::api::NewsItem> {
    vec![
        make_news_item("Wired", "a"),
        make_news_item("TechCrunch", "b"),
        make_news_item("The Verge", "c"),
    ]
}

// --- render / display_items ---

#[test]
fn test_display_items_duplicates_in_order() {
    let mut app = test_app();
    let items = three_items();
    app.render(items.clone());

    let shown = app.display_items();
    assert_eq!(shown.len(), 6);
    for (i, item) in shown.iter().enumerate() {
        assert_eq!(**item, items[i % 3]);
    }
}

#[test]
fn test_display_items_empty() {
    let app = test_app();
    assert!(app.display_items().is_empty());
}

#[test]
fn test_render_replaces_previous_items() {
    let mut app = test_app();
    app.render(fallback_news());
    app.render(three_items());
    assert_eq!(app.items, three_items());
}

#[test]
fn test_render_resets_offset_and_clamps_selection() {
    let mut app = test_app();
    app.render(three_items());
    app.selected_index = 2;
    app.offset = 40;
    app.render(vec![make_news_item("Wired", "only")]);
    assert_eq!(app.offset, 0);
    assert_eq!(app.selected_index, 0);
}

// --- pause ---

#[test]
fn test_toggle_pause_twice_restores_state() {
    let mut app = test_app();
    app.render(three_items());
    assert!(!app.paused);
    app.toggle_pause();
    assert!(app.paused);
    app.toggle_pause();
    assert!(!app.paused);
    assert_eq!(app.items, three_items());
    assert!(!app.loading);
}

#[test]
fn test_set_paused_is_explicit() {
    let mut app = test_app();
    app.set_paused(true);
    app.set_paused(true);
    assert!(app.paused);
    app.set_paused(false);
    assert!(!app.paused);
}

// --- tick ---

#[test]
fn test_tick_advances_and_wraps() {
    let mut app = test_app();
    app.tick(3);
    app.tick(3);
    assert_eq!(app.offset, 2);
    app.tick(3);
    assert_eq!(app.offset, 0);
}

#[test]
fn test_tick_frozen_while_paused() {
    let mut app = test_app();
    app.offset = 5;
    app.set_paused(true);
    app.tick(100);
    assert_eq!(app.offset, 5);
}

#[test]
fn test_tick_ignores_empty_strip() {
    let mut app = test_app();
    app.tick(0);
    assert_eq!(app.offset, 0);
}

// --- navigation ---

#[test]
fn test_move_down_clamps_at_bottom() {
    let mut app = test_app();
    app.render(three_items());
    app.move_down();
    app.move_down();
    app.move_down();
    assert_eq!(app.selected_index, 2);
    assert_eq!(app.selected_item().unwrap().headline, "c");
}

#[test]
fn test_move_up_clamps_at_zero() {
    let mut app = test_app();
    app.render(three_items());
    app.move_up();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_move_down_on_empty_list() {
    let mut app = test_app();
    app.move_down();
    assert_eq!(app.selected_index, 0);
    assert!(app.selected_item().is_none());
}

// --- help / refresh scheduling ---

#[test]
fn test_help_open_close() {
    let mut app = test_app();
    app.show_help();
    assert_eq!(app.input_mode, InputMode::Help);
    app.close_help();
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_fresh_app_needs_initial_load() {
    let mut app = test_app();
    assert!(app.needs_initial_load());
    // Rendering alone does not count as a completed fetch
    app.render(fallback_news());
    assert!(app.needs_initial_load());
    app.last_refresh = Some(tokio::time::Instant::now());
    assert!(!app.needs_initial_load());
}

#[test]
fn test_refresh_not_due_without_interval() {
    let mut app = test_app();
    app.last_refresh = Some(tokio::time::Instant::now());
    assert!(!app.refresh_due());
}

#[test]
fn test_refresh_due_after_interval() {
    let mut app = test_app();
    app.config.refresh_interval_secs = 1;
    assert!(!app.refresh_due());
    app.last_refresh = tokio::time::Instant::now().checked_sub(std::time::Duration::from_secs(2));
    assert!(app.refresh_due());
}

#[test]
fn test_prepare_refresh_sets_loading() {
    let mut app = test_app();
    app.status_message = Some("old".to_string());
    let sources = app.prepare_refresh();
    assert!(app.loading);
    assert!(app.status_message.is_none());
    assert_eq!(sources, app.config.feeds);
}
