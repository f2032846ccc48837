use tracing::{debug, error};

use crate::api::SeasonType;
use crate::stats::schema::TEAM_GAME;
use crate::stats::{Paginate, StatRecord};
use crate::team_abbrev::resolve_team_query;
use crate::tui::action::{Action, TeamAction};
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, Resolution};
use crate::tui::types::TeamFocus;

use super::{cycle, scroll_offset};

/// Handle Team screen actions
pub fn reduce_team(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let Action::Team(action) = action else {
        return Err(state);
    };
    let mut new_state = state;

    let effect = match action {
        TeamAction::InputChar(c) => {
            new_state.team.input.push(*c);
            Effect::None
        }
        TeamAction::InputBackspace => {
            new_state.team.input.pop();
            Effect::None
        }
        TeamAction::Search => search(&mut new_state),
        TeamAction::FocusNext => {
            move_focus(&mut new_state, true);
            Effect::None
        }
        TeamAction::FocusPrevious => {
            move_focus(&mut new_state, false);
            Effect::None
        }
        TeamAction::ShowMore(season_type) => {
            let pager = new_state.team.pager_mut(*season_type);
            pager.advance();
            debug!("TEAM: {} table now shows {} rows", season_type, pager.visible());
            Effect::None
        }
        TeamAction::ScrollColumns { season_type, delta } => {
            let offset = new_state.team.column_offset_mut(*season_type);
            *offset = scroll_offset(*offset, *delta, TEAM_GAME.len());
            Effect::None
        }
        TeamAction::GamesLoaded {
            season_type,
            seq,
            result,
        } => {
            games_loaded(&mut new_state, *season_type, *seq, result.clone());
            Effect::None
        }
    };

    Ok((new_state, effect))
}

/// Issue one fetch per season type
fn search(state: &mut AppState) -> Effect {
    let team = resolve_team_query(&state.team.input);
    if team.is_empty() {
        state
            .system
            .set_status_error_message("Enter a team name or abbreviation to search".to_string());
        return Effect::None;
    }

    debug!("TEAM: Searching games for {}", team);
    state.team.query = team.clone();
    state.system.reset_status_message();

    let effects = SeasonType::ALL
        .into_iter()
        .map(|season_type| {
            let seq = state.team.slot_mut(season_type).issue();
            Effect::FetchTeamGames {
                season_type,
                seq,
                team: team.clone(),
            }
        })
        .collect();
    Effect::Batch(effects)
}

fn move_focus(state: &mut AppState, forward: bool) {
    let ring: Vec<TeamFocus> = std::iter::once(TeamFocus::Input)
        .chain(state.team.visible_tables().into_iter().map(TeamFocus::Table))
        .collect();
    if let Some(next) = cycle(&ring, state.team.focus, forward) {
        state.team.focus = next;
    }
}

fn games_loaded(
    state: &mut AppState,
    season_type: SeasonType,
    seq: u64,
    result: Result<Vec<StatRecord>, String>,
) {
    match state.team.slot_mut(season_type).resolve(seq, result) {
        Resolution::Applied => {
            let rows = state.team.slot(season_type).displayed().map_or(0, Vec::len);
            debug!("TEAM: Loaded {} {} games (seq={})", rows, season_type, seq);
        }
        Resolution::Failed(e) => {
            error!("TEAM: Failed to load {} games: {}", season_type, e);
            state
                .system
                .set_status_error_message(format!("Failed to load {} games: {}", season_type, e));
        }
        Resolution::Stale => {
            debug!("TEAM: Dropping stale {} response (seq={})", season_type, seq);
        }
    }

    if let TeamFocus::Table(focused) = state.team.focus {
        if !state.team.visible_tables().contains(&focused) {
            state.team.focus = TeamFocus::Input;
        }
    }
}
