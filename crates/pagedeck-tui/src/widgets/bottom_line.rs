use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Decorative line above the bottom margin. Purely cosmetic.
pub struct BottomLineWidget;

impl BottomLineWidget {
    pub const HEIGHT: u16 = 1;
    pub const SIDE_MARGIN: u16 = 40;
    pub const BOTTOM_MARGIN: u16 = 36;

    pub fn render(frame: &mut Frame, area: Rect, visible: bool) {
        if !visible {
            return;
        }
        let Some(line_area) = Self::line_area(area) else {
            return;
        };
        let block = Block::default().style(Style::default().bg(Color::Gray));
        frame.render_widget(block, line_area);
    }

    /// Fixed margins, degraded proportionally on terminals too small to
    /// hold them.
    fn line_area(area: Rect) -> Option<Rect> {
        if area.width < 4 || area.height <= Self::HEIGHT {
            return None;
        }

        let side = if area.width > Self::SIDE_MARGIN * 2 + 4 {
            Self::SIDE_MARGIN
        } else {
            area.width / 4
        };
        let bottom = if area.height > Self::BOTTOM_MARGIN + Self::HEIGHT + 1 {
            Self::BOTTOM_MARGIN
        } else {
            area.height / 6
        };

        let width = area.width - side * 2;
        let y = area.y + area.height - bottom - Self::HEIGHT;
        Some(Rect::new(area.x + side, y, width, Self::HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_margins_on_large_terminal() {
        let area = Rect::new(0, 0, 120, 50);
        let line = BottomLineWidget::line_area(area).unwrap();
        assert_eq!(line.x, 40);
        assert_eq!(line.width, 40);
        assert_eq!(line.height, 1);
        assert_eq!(line.y, 50 - 36 - 1);
    }

    #[test]
    fn test_degraded_margins_on_small_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let line = BottomLineWidget::line_area(area).unwrap();
        assert_eq!(line.x, 20);
        assert_eq!(line.width, 40);
        assert_eq!(line.y, 24 - 4 - 1);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        assert!(BottomLineWidget::line_area(Rect::new(0, 0, 3, 1)).is_none());
    }
}
