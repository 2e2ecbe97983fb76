use pagedeck_core::{HostContainer, Page, PageNavigator};
use ratatui::{layout::Rect, Frame};

use crate::pager::TerminalPager;

/// A page the terminal pager can draw.
pub trait RenderPage: Page {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Renders the sliding page strip: the previous/current/next pages, each
/// shifted by the pager's live position and clipped to the viewport.
pub struct PagerView;

impl PagerView {
    pub fn render<P: RenderPage>(
        frame: &mut Frame,
        area: Rect,
        navigator: &mut PageNavigator<P, TerminalPager>,
    ) {
        if navigator.is_empty() || area.width == 0 {
            return;
        }

        let position = navigator.host().position();
        let width = navigator.host().visible_width();
        let current = navigator.current_index();
        let last = (current + 1).min(navigator.len() - 1);

        for index in current.saturating_sub(1)..=last {
            let screen_x = index as f64 * width - position;
            let Some(slice) = slice_area(area, screen_x, width) else {
                continue;
            };
            if let Some(page) = navigator.registry_mut().page_mut(index) {
                page.render(frame, slice);
            }
        }
    }
}

/// Horizontal slice of `area` covered by a page whose left edge sits at
/// `screen_x` columns from the viewport's left edge.
fn slice_area(area: Rect, screen_x: f64, width: f64) -> Option<Rect> {
    let start = screen_x.round() as i32;
    let end = start + width.round() as i32;
    let clipped_start = start.max(0);
    let clipped_end = end.min(area.width as i32);
    if clipped_end <= clipped_start {
        return None;
    }
    Some(Rect::new(
        area.x + clipped_start as u16,
        area.y,
        (clipped_end - clipped_start) as u16,
        area.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_centered_page_fills_viewport() {
        let slice = slice_area(AREA, 0.0, 80.0).unwrap();
        assert_eq!(slice, AREA);
    }

    #[test]
    fn test_page_sliding_in_from_the_right_is_clipped() {
        let slice = slice_area(AREA, 50.0, 80.0).unwrap();
        assert_eq!(slice.x, 50);
        assert_eq!(slice.width, 30);
    }

    #[test]
    fn test_page_sliding_out_to_the_left_is_clipped() {
        let slice = slice_area(AREA, -30.0, 80.0).unwrap();
        assert_eq!(slice.x, 0);
        assert_eq!(slice.width, 50);
    }

    #[test]
    fn test_off_screen_page_renders_nothing() {
        assert!(slice_area(AREA, 80.0, 80.0).is_none());
        assert!(slice_area(AREA, -80.0, 80.0).is_none());
    }
}
