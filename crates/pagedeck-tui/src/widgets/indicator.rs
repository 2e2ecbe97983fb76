use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Page-indicator dots, one per page, the current one highlighted.
/// Hidden when `count` is 0.
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, current: usize, count: usize) {
        if count == 0 || area.height == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(count * 2);
        for index in 0..count {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            if index == current {
                spans.push(Span::styled(ACTIVE_DOT, Style::default().fg(Color::White)));
            } else {
                spans.push(Span::styled(
                    INACTIVE_DOT,
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
