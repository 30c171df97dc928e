//! latview - a terminal latency percentile chart.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use latview::app::{App, Theme};
use latview::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "latview")]
#[command(version)]
#[command(about = "A terminal latency percentile chart", long_about = None)]
struct Args {
    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting latview");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let theme = if args.light {
        Theme::GruvboxLight
    } else {
        Theme::GruvboxDark
    };
    let app = App::new(theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("latview exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now_ms = chrono::Utc::now().timestamp_millis();
        terminal.draw(|f| ui::draw(f, &mut app, now_ms))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Sample mutations
                    (KeyModifiers::NONE, KeyCode::Char('a')) => app.add_sample(),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.remove_sample(),

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_samples(),

                    // Appearance and help
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => app.show_help(),

                    _ => {},
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.click_at(mouse.column, mouse.row);
                    }
                },
                _ => {},
            }
        }
    }
}
