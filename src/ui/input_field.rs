use crate::component::input::InputElement;
use crate::ui::layout::stack;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, input: &InputElement, focused: bool, mask: char) {
    let validation = input.validation();
    let fragment = input.fragment();
    let rows = stack(area, &[1, 3, 1]);

    frame.render_widget(
        Paragraph::new(Span::styled(fragment.label.as_str(), Theme::label())),
        rows[0],
    );

    let (mut border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    if let Some(style) = Theme::validation_border(validation) {
        border_style = style;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    if inner.width > 0 && inner.height > 0 {
        let value = input.display_value(mask);
        let cursor_col = cursor_column(&value, input.display_cursor());
        // Scroll horizontally so the cursor stays inside the field
        let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
        let paragraph = Paragraph::new(value)
            .style(Theme::input_text())
            .scroll((0, scroll));
        frame.render_widget(paragraph, inner);

        if focused {
            let cursor_x = inner.x + cursor_col - scroll;
            frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
        }
    }

    // Help text is only shown while a validation marker is set
    if input.help_visible() && rows[2].height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                fragment.help_text.as_str(),
                Theme::help(validation),
            )),
            rows[2],
        );
    }
}

/// Display column of the cursor, clamped to what a terminal can address.
fn cursor_column(value: &str, cursor: usize) -> u16 {
    let width: usize = value
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    width.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_counts_wide_glyphs() {
        assert_eq!(cursor_column("abc", 2), 2);
        assert_eq!(cursor_column("登録", 2), 4);
        assert_eq!(cursor_column("登録", 1), 2);
    }

    #[test]
    fn test_cursor_column_saturates_on_huge_values() {
        let value = "登".repeat(40_000);
        assert_eq!(cursor_column(&value, 40_000), u16::MAX);
    }
}
