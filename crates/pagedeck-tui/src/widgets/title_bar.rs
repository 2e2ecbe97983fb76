use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Navigation title, centered on display width.
pub struct TitleBarWidget;

impl TitleBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, title: Option<&str>) {
        let Some(title) = title else {
            return;
        };
        if area.height == 0 {
            return;
        }

        // Center manually; wide glyphs make char counts lie.
        let text_width = title.width() as u16;
        let pad = area.width.saturating_sub(text_width) / 2;
        let padded = format!("{}{}", " ".repeat(pad as usize), title);

        let paragraph = Paragraph::new(Span::styled(
            padded,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(paragraph, area);
    }
}
