use crate::app::handler::pulse_dim;
use crate::component::button::ButtonElement;
use crate::ui::layout::BUTTON_HEIGHT;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Horizontal room around the label: borders plus two cells of padding a side.
const BUTTON_CHROME: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, button: &ButtonElement, focused: bool, tick_count: u64) {
    let fragment = button.fragment();
    let label_width = fragment.label.as_str().width() as u16;
    let width = (label_width + BUTTON_CHROME).min(area.width);

    // Right-aligned within the card body
    let rect = Rect::new(
        area.right().saturating_sub(width),
        area.y,
        width,
        area.height.min(BUTTON_HEIGHT),
    );

    let style = if fragment.disabled {
        Theme::button_disabled(fragment.fading && pulse_dim(tick_count))
    } else {
        Theme::button(focused)
    };
    let border_type = if focused && !fragment.disabled {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style)
        .style(style);
    let paragraph = Paragraph::new(fragment.label.as_str())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, rect);
}
