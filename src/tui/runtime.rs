use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Application runtime - owns state and drives action processing
///
/// The Runtime is responsible for:
/// - Owning the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        // Take ownership temporarily using mem::take pattern (no clone!)
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Turn fetch effects into futures and queue everything for the executor
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchPlayerSlice { slice, seq, player } => {
                debug!("EFFECT: Fetching {} for {} (seq={})", slice.label(), player, seq);
                let fetch_effect = self.data_effects.fetch_player_slice(slice, seq, player);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchTeamGames {
                season_type,
                seq,
                team,
            } => {
                debug!("EFFECT: Fetching {} games for {} (seq={})", season_type, team, seq);
                let fetch_effect = self.data_effects.fetch_team_games(season_type, seq, team);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchLiveGames { seq } => {
                debug!("EFFECT: Fetching live games (seq={})", seq);
                let fetch_effect = self.data_effects.fetch_live_games(seq);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchGameDetails { game_id, seq } => {
                debug!("EFFECT: Fetching details for game {} (seq={})", game_id, seq);
                let fetch_effect = self.data_effects.fetch_game_details(game_id, seq);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// Runs in a separate tokio task. Every completed future feeds its action
    /// back into the action channel, in whatever order they finish.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            Effect::FetchPlayerSlice { .. }
            | Effect::FetchTeamGames { .. }
            | Effect::FetchLiveGames { .. }
            | Effect::FetchGameDetails { .. } => {
                tracing::warn!(
                    "Fetch effect reached async executor - this should be handled by execute_effect()"
                );
            }
        }
    }
}
