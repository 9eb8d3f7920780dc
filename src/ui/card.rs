use crate::app::state::{AppState, FocusTarget};
use crate::component::card::SlotItem;
use crate::component::form::BodyElement;
use crate::ui::layout::{stack, BUTTON_HEIGHT, INPUT_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::{button, input_field};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Rows the card body needs to show every slotted item.
pub fn body_height(state: &AppState) -> u16 {
    state
        .form
        .card()
        .map(|card| {
            card.fragment()
                .body
                .iter()
                .map(|item| item_height(state, item))
                .sum()
        })
        .unwrap_or(0)
}

fn item_height(state: &AppState, item: &SlotItem) -> u16 {
    match item {
        SlotItem::Text(_) => 1,
        SlotItem::Node(id) => match state.form.body_element(*id) {
            Some(BodyElement::Input(..)) => INPUT_HEIGHT,
            Some(BodyElement::Button(_)) => BUTTON_HEIGHT,
            None => 0,
        },
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(card) = state.form.card() else {
        return;
    };
    let fragment = card.fragment();

    let block = Block::default()
        .title(Line::from(format!(" {} ", fragment.header_text())).centered())
        .title_style(Theme::card_header())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::card_border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heights: Vec<u16> = fragment
        .body
        .iter()
        .map(|item| item_height(state, item))
        .collect();
    for (item, rect) in fragment.body.iter().zip(stack(inner, &heights)) {
        if rect.height == 0 {
            continue;
        }
        match item {
            SlotItem::Text(text) => frame.render_widget(Paragraph::new(text.as_str()), rect),
            SlotItem::Node(id) => match state.form.body_element(*id) {
                Some(BodyElement::Input(field, input)) => input_field::render(
                    frame,
                    rect,
                    input,
                    state.focus == FocusTarget::Field(field),
                    state.config.ui.mask_char,
                ),
                Some(BodyElement::Button(btn)) => button::render(
                    frame,
                    rect,
                    btn,
                    state.focus == FocusTarget::Submit,
                    state.tick_count,
                ),
                None => {}
            },
        }
    }
}
