//! Demo pages for the deck: plain content pages interleaved with pages
//! that cross-fade with swipe progress.

use pagedeck_core::{Interpolatable, Page};
use pagedeck_tui::RenderPage;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const PALETTE: [(u8, u8, u8); 6] = [
    (215, 153, 33),  // yellow
    (69, 133, 136),  // blue
    (152, 151, 26),  // green
    (177, 98, 134),  // purple
    (214, 93, 14),   // orange
    (104, 157, 106), // aqua
];

pub struct DemoPage {
    title: String,
    body: Vec<String>,
    accent: (u8, u8, u8),
    /// Last progress pushed by the navigator; None for pages that do not
    /// opt into interpolation.
    fade: Option<f64>,
}

impl DemoPage {
    pub fn plain(index: usize) -> Self {
        Self::build(index, false)
    }

    pub fn fading(index: usize) -> Self {
        Self::build(index, true)
    }

    fn build(index: usize, fades: bool) -> Self {
        let body = if fades {
            vec![
                "This page cross-fades with swipe progress.".to_owned(),
                String::new(),
                "Drag it partway and watch the text dim as it".to_owned(),
                "leaves the center of the screen.".to_owned(),
            ]
        } else {
            vec![
                "A plain page. It slides but does not fade.".to_owned(),
                String::new(),
                "←/→ or h/l to navigate, digits to jump,".to_owned(),
                "s toggles swipe, q quits.".to_owned(),
            ]
        };
        Self {
            title: format!("Page {}", index + 1),
            body,
            accent: PALETTE[index % PALETTE.len()],
            fade: fades.then_some(0.0),
        }
    }

    fn accent_color(&self) -> Color {
        // Brightness follows 1 - |progress| for fading pages.
        let alpha = match self.fade {
            Some(progress) => 1.0 - progress.abs().min(1.0),
            None => 1.0,
        };
        let (r, g, b) = self.accent;
        Color::Rgb(
            (r as f64 * alpha) as u8,
            (g as f64 * alpha) as u8,
            (b as f64 * alpha) as u8,
        )
    }
}

impl Page for DemoPage {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn as_interpolatable(&mut self) -> Option<&mut dyn Interpolatable> {
        if self.fade.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl Interpolatable for DemoPage {
    fn interpolate(&mut self, progress: f64) {
        self.fade = Some(progress);
    }
}

impl RenderPage for DemoPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = self.accent_color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(color),
            ));

        let mut lines: Vec<Line> = self
            .body
            .iter()
            .map(|text| Line::styled(text.clone(), Style::default().fg(color)))
            .collect();
        if let Some(progress) = self.fade {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("progress: {:+.2}", progress),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Build the demo deck: every other page opts into cross-fading.
pub fn build_deck(count: usize) -> Vec<DemoPage> {
    (0..count)
        .map(|i| {
            if i % 2 == 1 {
                DemoPage::fading(i)
            } else {
                DemoPage::plain(i)
            }
        })
        .collect()
}
