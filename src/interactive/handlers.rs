use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::DashboardApp;
use super::event::{Event, EventHandler};
use crate::config::get_api_url;
use crate::error::{ErrorContext, OctoResult};
use crate::logging::{log_debug, log_error, log_info};

pub async fn run_dashboard() -> OctoResult<()> {
    log_info("Starting dashboard");

    // Panics inside the alternate screen are invisible; keep them in the log.
    std::panic::set_hook(Box::new(|info| {
        log_error(&format!("PANIC: {}", info));
    }));

    // Fail on a missing API URL before touching the terminal.
    get_api_url()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = match DashboardApp::new().await {
        Ok(app) => app,
        Err(e) => {
            log_error(&format!("Failed to create dashboard: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(e);
        }
    };
    let events = EventHandler::new(Duration::from_millis(100));

    loop {
        terminal.draw(|f| super::ui::draw(f, &app))?;

        match events.recv().context("event channel closed")? {
            Event::Key(key) => {
                log_debug(&format!("Key pressed: {:?} in {:?}", key.code, app.view));
                app.handle_key(key);
            }
            Event::Tick => app.on_tick(),
        }

        // Async work queued by key handling: draw the intermediate state
        // first so Saving/Loading are visible while the request runs.
        if app.pending_save {
            app.pending_save = false;
            terminal.draw(|f| super::ui::draw(f, &app))?;
            app.submit_save().await;
        }

        if app.pending_refresh {
            app.pending_refresh = false;
            app.loading = true;
            terminal.draw(|f| super::ui::draw(f, &app))?;
            app.refresh().await;
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting dashboard");
    restore_terminal(&mut terminal)?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> OctoResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
