use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use newsticker::app::{App, InputMode};
use newsticker::config::Config;
use newsticker::ui::formatters::format_plain_line;
use newsticker::{logging, ui};
use ratatui::prelude::*;
use std::io;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "newsticker")]
#[command(about = "Terminal news ticker for AI and tech headlines", long_about = None)]
struct Cli {
    /// Auto-refresh interval in seconds (0 disables), overrides the config file
    #[arg(short, long)]
    interval: Option<u64>,

    /// Milliseconds between ticker steps, overrides the config file
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Fetch once, print the headlines to stdout and exit
    #[arg(long)]
    plain: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes first so config load warnings are kept
    let log_path = if cli.plain {
        logging::init_stderr(&cli.log_level)?;
        None
    } else {
        Some(logging::init_file(&cli.log_level)?)
    };

    let mut config = Config::load()?;
    if let Some(interval) = cli.interval {
        config.refresh_interval_secs = interval;
    }
    if let Some(tick) = cli.tick_ms.filter(|t| *t > 0) {
        config.scroll_tick_ms = tick;
    }

    if cli.plain {
        return run_plain(config).await;
    }

    if let Some(path) = &log_path {
        info!(log = %path.display(), feeds = config.feeds.len(), "starting ticker");
    }

    let mut app = App::with_config(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "ticker exited with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_plain(config: Config) -> Result<()> {
    let mut app = App::with_config(config)?;
    app.refresh().await;
    for item in &app.items {
        println!("{}", format_plain_line(item));
    }
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick = app.config.scroll_tick();
    let mut last_tick = Instant::now();
    let mut refresh_requested = false;

    loop {
        if refresh_requested || app.needs_initial_load() || app.refresh_due() {
            let sources = app.prepare_refresh();
            // Draw the loading state before the fetch blocks the loop
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.execute_refresh(&sources).await;
            refresh_requested = false;
            last_tick = Instant::now();
        }

        if last_tick.elapsed() >= tick {
            app.tick(ui::ticker::cycle_width(&app.items));
            last_tick = Instant::now();
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('?') => app.show_help(),
                        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_pause(),
                        KeyCode::Char('r') => refresh_requested = true,
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        _ => {}
                    },
                    InputMode::Help => match key.code {
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                        _ => {}
                    },
                }
            }
        }
    }
}
