pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod types;
pub mod views;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::Tab;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::api::StatsProvider;
use crate::config::Config;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
pub async fn run(provider: Arc<dyn StatsProvider>, config: Config) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(provider, config.game_log_season.clone()));

    let mut initial_state = AppState::default();
    initial_state.system.config = config;

    let mut runtime = Runtime::new(initial_state, data_effects);
    let result = event_loop(&mut terminal, &mut runtime).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Completed fetches first, so new data shows up in this frame
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            views::render_app(runtime.state(), area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(EVENT_POLL_INTERVAL)? {
            // Let spawned fetches make progress between polls
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key, runtime.state()) {
            Some(Action::Quit) => {
                tracing::debug!("ACTION: Quitting application");
                break;
            }
            Some(action) => runtime.dispatch(action),
            None => {}
        }
    }
    Ok(())
}
