use crate::app::state::*;
use crate::component::form::Field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = " Tab/↑↓ move · Enter submit · Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Focus indicator
    let focus_name = match state.focus {
        FocusTarget::Field(Field::Username) => "USERNAME",
        FocusTarget::Field(Field::Email) => "EMAIL",
        FocusTarget::Field(Field::Password) => "PASSWORD",
        FocusTarget::Field(Field::PasswordRepeat) => "REPEAT",
        FocusTarget::Submit => "SUBMIT",
    };
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HINTS.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(HINTS, Theme::status_hint()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
