use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by one input: label, bordered field, help line.
pub const INPUT_HEIGHT: u16 = 5;
/// Rows taken by the button.
pub const BUTTON_HEIGHT: u16 = 3;

const CARD_WIDTH: u16 = 56;

pub struct AppLayout {
    pub card: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, body_height: u16) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the card: fixed width, height fits header + body + borders
    let card_w = CARD_WIDTH.min(content.width.saturating_sub(2));
    let card_h = (body_height + 2).min(content.height);
    let card_x = content.x + content.width.saturating_sub(card_w) / 2;
    let card_y = content.y + content.height.saturating_sub(card_h) / 2;

    AppLayout {
        card: Rect::new(card_x, card_y, card_w, card_h),
        status_bar,
    }
}

/// Stack body items of the given heights from the top of `area`, clipping
/// whatever does not fit.
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = area.y;
    heights
        .iter()
        .map(|h| {
            let available = area.bottom().saturating_sub(y);
            let rect = Rect::new(area.x, y, area.width, (*h).min(available));
            y = y.saturating_add(rect.height);
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_centered() {
        let layout = compute_layout(Rect::new(0, 0, 100, 40), 23);
        assert_eq!(layout.card.width, 56);
        assert_eq!(layout.card.height, 25);
        assert_eq!(layout.card.x, 22);
        assert_eq!(layout.status_bar, Rect::new(0, 39, 100, 1));
    }

    #[test]
    fn test_card_shrinks_on_small_terminal() {
        let layout = compute_layout(Rect::new(0, 0, 30, 12), 23);
        assert_eq!(layout.card.width, 28);
        assert_eq!(layout.card.height, 11);
    }

    #[test]
    fn test_stack_clips_overflow() {
        let rects = stack(Rect::new(0, 0, 10, 7), &[5, 5]);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 5));
        assert_eq!(rects[1], Rect::new(0, 5, 10, 2));
    }
}
