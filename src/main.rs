use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod config;
mod error;
mod help;
mod layout;
mod notification;
mod search;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use config::{Config, PanelLayout};
use error::MultiSearchError;
use search::{ProviderRegistry, SearchWorker};

const DEBUG_LOG_PATH: &str = "/tmp/multisearch-debug.log";

/// Side-by-side web and video search in the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search the web and video in side-by-side panels, one query per panel"
)]
struct Args {
    /// Number of panels to start with (2, 3 or 6)
    #[arg(short, long, value_parser = error::parse_layout)]
    layout: Option<PanelLayout>,

    /// Config file to use instead of ~/.config/multisearch/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = match &args.config {
        Some(path) if !path.exists() => {
            return Err(MultiSearchError::ConfigNotFound(path.clone()).into());
        }
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    if cfg!(debug_assertions) || config_result.config.debug {
        init_debug_log()?;
    }

    if let Some(layout) = args.layout {
        config_result.config.layout.panels = layout;
    }

    config::log_config_status(&config_result.config);

    let worker = SearchWorker::spawn(ProviderRegistry::from_config(&config_result.config));
    let app = App::new(&config_result.config, Some(worker));

    let terminal = init_terminal()?;
    let result = run(terminal, app, &config_result.config, config_result.warning);
    restore_terminal()?;
    result?;

    log::debug!("=== MULTISEARCH SESSION ENDED ===");

    Ok(())
}

/// Write DEBUG logs to /tmp/multisearch-debug.log
fn init_debug_log() -> Result<()> {
    use std::io::Write;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(DEBUG_LOG_PATH)
        .map_err(MultiSearchError::from)?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== MULTISEARCH SESSION STARTED ===");
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config: &Config,
    load_warning: Option<String>,
) -> Result<()> {
    if let Some(warning) = load_warning {
        app.notification.show_warning(&warning);
    }
    for warning in config::validate_config(config) {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
