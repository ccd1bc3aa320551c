use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use discovery_wizard::config::AppConfig;
use discovery_wizard::core::clipboard::Osc52Clipboard;
use discovery_wizard::core::export::DocumentExporter;
use discovery_wizard::core::questionnaire::TemplateGenerator;
use discovery_wizard::core::session::DiscoverySession;
use discovery_wizard::core::upload::UuidIdGenerator;
use discovery_wizard::error::{AppError, AppResult};
use discovery_wizard::tui::app::AppState;
use discovery_wizard::tui::events::AppEvent;

fn main() -> miette::Result<()> {
    // Logging goes to a file; stdout belongs to the TUI.
    let _log_guard = discovery_wizard::core::logging::init_tui(&AppConfig::log_dir());
    tracing::info!(
        version = discovery_wizard::VERSION,
        "{} starting",
        discovery_wizard::NAME
    );

    let config = AppConfig::load();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    runtime.block_on(run(config))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn run(config: AppConfig) -> AppResult<()> {
    let mut terminal = setup_terminal(config.tui.mouse_enabled)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let session = DiscoverySession::new(
        &config,
        Arc::new(TemplateGenerator),
        Arc::new(DocumentExporter),
        Arc::new(UuidIdGenerator),
        Arc::new(event_tx),
    );
    let mut app = AppState::new(&config, session, Box::new(Osc52Clipboard), event_rx);

    let result = app
        .run(&mut terminal, config.tui.tick_rate())
        .await
        .map_err(AppError::Render);

    // Always restore, even when the loop failed.
    restore_terminal(&mut terminal, config.tui.mouse_enabled)?;
    result
}

fn setup_terminal(mouse: bool) -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(AppError::Terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).map_err(AppError::Terminal)?;
    if mouse {
        execute!(stdout, EnableMouseCapture).map_err(AppError::Terminal)?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(AppError::Terminal)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> AppResult<()> {
    disable_raw_mode().map_err(AppError::Terminal)?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture).map_err(AppError::Terminal)?;
    }
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)
        .map_err(AppError::Terminal)?;
    terminal.show_cursor().map_err(AppError::Terminal)
}
