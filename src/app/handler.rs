use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::component::form::{FormEffect, Phase};
use crate::component::input::RawEdit;
use crate::component::ComponentError;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Ticks per half cycle of the button's pulse.
const PULSE_TICKS: u64 = 5;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::SubmissionElapsed { id } => {
            match state.form.complete_submission(id) {
                Ok(true) => state.dirty = true,
                Ok(false) => {}
                Err(e) => report(state, e),
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.form.phase() == Phase::Submitting && state.tick_count % PULSE_TICKS == 0 {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Whether the pulsing treatment is in its dim half.
pub fn pulse_dim(tick_count: u64) -> bool {
    (tick_count / PULSE_TICKS) % 2 == 0
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusTarget::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = state.form.click();
                let actions = effects_to_actions(state, result);
                if !actions.is_empty() {
                    state.last_submitted = Some(Local::now());
                }
                actions
            }
            _ => vec![],
        },
        FocusTarget::Field(field) => {
            let edit = match key.code {
                KeyCode::Enter => {
                    state.cycle_focus();
                    return vec![];
                }
                KeyCode::Char('w') if ctrl => RawEdit::DeleteWordBack,
                KeyCode::Char('u') if ctrl => RawEdit::Replace(String::new()),
                KeyCode::Char(_) if ctrl => return vec![],
                KeyCode::Char(c) => RawEdit::Insert(c),
                KeyCode::Backspace => RawEdit::DeleteBack,
                KeyCode::Delete => RawEdit::DeleteForward,
                KeyCode::Left => RawEdit::Left,
                KeyCode::Right => RawEdit::Right,
                KeyCode::Home => RawEdit::Home,
                KeyCode::End => RawEdit::End,
                _ => return vec![],
            };
            let result = state.form.edit(field, &edit);
            effects_to_actions(state, result)
        }
    }
}

fn effects_to_actions(
    state: &mut AppState,
    result: Result<Vec<FormEffect>, ComponentError>,
) -> Vec<Action> {
    match result {
        Ok(effects) => {
            // A signal the form accepted supersedes any earlier error
            if state.status_message.take().is_some() {
                state.dirty = true;
            }
            effects
                .into_iter()
                .map(|effect| match effect {
                    FormEffect::ScheduleCompletion { id, delay } => {
                        Action::ScheduleCompletion { id, delay }
                    }
                })
                .collect()
        }
        Err(e) => {
            report(state, e);
            vec![]
        }
    }
}

fn report(state: &mut AppState, error: ComponentError) {
    tracing::error!(%error, "form rejected signal");
    state.status_message = Some(format!("Error: {}", error));
    state.dirty = true;
}
