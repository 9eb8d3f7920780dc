use crate::component::input::ValidationState;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(0x00, 0x66, 0xCC);
    pub const ACCENT_HOVER: Color = Color::Rgb(0x1D, 0x80, 0xF0);
    pub const ACCENT_DIM: Color = Color::Rgb(0x6A, 0xA8, 0xF0);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_HOVER)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn card_border() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn card_header() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    /// Field border colour for a validation marker, if it overrides the default.
    pub fn validation_border(validation: ValidationState) -> Option<Style> {
        match validation {
            ValidationState::None => None,
            ValidationState::Valid => Some(Style::default().fg(Color::Green)),
            ValidationState::Invalid => Some(Style::default().fg(Color::Red)),
        }
    }

    pub fn help(validation: ValidationState) -> Style {
        match validation {
            ValidationState::Valid => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Red),
        }
    }

    pub fn button(focused: bool) -> Style {
        let bg = if focused { Self::ACCENT_HOVER } else { Self::ACCENT };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled(dim: bool) -> Style {
        let fg = if dim { Self::ACCENT_DIM } else { Color::White };
        Style::default().fg(fg).bg(Self::ACCENT_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
