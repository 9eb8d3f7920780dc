mod button;
mod card;
mod input_field;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, card::body_height(state));

    card::render(frame, app_layout.card, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FocusTarget;
    use crate::component::form::{Field, EMAIL_MISSING, USERNAME_TAKEN};
    use crate::component::input::RawEdit;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> Vec<String> {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen(state: &AppState) -> String {
        draw(state).join("\n")
    }

    #[test]
    fn test_renders_form_chrome() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let text = screen(&state);
        assert!(text.contains("Sign Up"));
        assert!(text.contains("Username"));
        assert!(text.contains("Email"));
        assert!(text.contains("Register"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        for c in "hunter2".chars() {
            state.form.edit(Field::Password, &RawEdit::Insert(c)).unwrap();
        }
        let text = screen(&state);
        assert!(!text.contains("hunter2"));
        assert!(text.contains(&"•".repeat(7)));
    }

    #[test]
    fn test_username_is_plain_text() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state
            .form
            .edit(Field::Username, &RawEdit::Replace("alice".into()))
            .unwrap();
        assert!(screen(&state).contains("alice"));
    }

    #[test]
    fn test_button_shows_loading_while_submitting() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.focus = FocusTarget::Submit;
        state.form.click().unwrap();
        let text = screen(&state);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Register"));
        assert!(text.contains("Submitting..."));
    }

    #[test]
    fn test_help_text_appears_after_rejection() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        assert!(!screen(&state).contains(USERNAME_TAKEN));

        let effects = state.form.click().unwrap();
        assert_eq!(effects.len(), 1);
        state.form.complete_submission(0).unwrap();

        let text = screen(&state);
        assert!(text.contains(USERNAME_TAKEN));
        assert!(text.contains(EMAIL_MISSING));
        assert!(text.contains("Register"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let backend = TestBackend::new(12, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
