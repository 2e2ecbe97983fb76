//! Terminal paging surface: the [`HostContainer`] the navigator drives.
//!
//! Pages sit side by side on a virtual strip, page `i` resting at
//! `i * width` columns. The pager animates its absolute position along the
//! strip for programmatic transitions and maps mouse drags onto it for
//! swipes; releasing a drag snaps to the nearest page.
//!
//! Offset convention: [`HostContainer::live_scroll_offset`] is reported
//! relative to `(current - 1) * width`, so it reads one page width at
//! rest. The progress math in `pagedeck_core::progress` relies on that.

use pagedeck_core::{HostContainer, NavigationDirection, SlideConfig};

use crate::slide::SlideAnimator;

/// Event produced by [`TerminalPager::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    /// A transition or snap finished on the page at `index`. Forward this
    /// to `PageNavigator::handle_settle` with the page's id.
    Settled { index: usize },
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    start_column: u16,
    start_position: f64,
}

/// Host container rendering pages as a horizontally sliding strip.
pub struct TerminalPager {
    animator: SlideAnimator,
    /// Width of one page in columns.
    width: f64,
    /// Number of pages on the strip; needed to clamp drags and snaps.
    page_count: usize,
    /// Index the live offset is reported against. Follows the
    /// navigator's optimistic updates: set at request time, and again
    /// when a drag snap settles.
    current: usize,
    /// Transition in flight that should produce a settle report.
    pending_settle: Option<usize>,
    drag: Option<DragState>,
    swipe_enabled: bool,
    indicator: (usize, usize),
    title: Option<String>,
    bottom_line_visible: bool,
}

impl TerminalPager {
    pub fn new(config: SlideConfig, width: u16) -> Self {
        Self {
            animator: SlideAnimator::new(config),
            width: width as f64,
            page_count: 0,
            current: 0,
            pending_settle: None,
            drag: None,
            swipe_enabled: true,
            indicator: (0, 0),
            title: None,
            bottom_line_visible: false,
        }
    }

    /// Deck size, used to clamp drags and snap targets. The glue layer
    /// keeps this in sync with the registry.
    pub fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
    }

    /// Update the page width on terminal resize, keeping the strip
    /// anchored on the current page.
    pub fn set_visible_width(&mut self, width: u16) {
        let width = width as f64;
        if (width - self.width).abs() < f64::EPSILON || width <= 0.0 {
            return;
        }
        self.width = width;
        self.animator.set_offset(self.current as f64 * width);
        self.drag = None;
    }

    /// Absolute position along the strip, for rendering.
    pub fn position(&self) -> f64 {
        self.animator.offset()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn indicator(&self) -> (usize, usize) {
        self.indicator
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn bottom_line_visible(&self) -> bool {
        self.bottom_line_visible
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Frame interval for the animation loop.
    pub fn tick_duration(&self) -> std::time::Duration {
        self.animator.tick_duration()
    }

    /// Step the animation. Emits at most one settle event per completed
    /// transition.
    pub fn advance(&mut self) -> Option<PagerEvent> {
        self.animator.update();
        if !self.animator.is_animating() {
            if let Some(index) = self.pending_settle.take() {
                self.current = index;
                return Some(PagerEvent::Settled { index });
            }
        }
        None
    }

    /// Begin a swipe at `column`. Ignored while swipe is disabled.
    pub fn begin_drag(&mut self, column: u16) {
        if !self.swipe_enabled || self.page_count == 0 {
            return;
        }
        self.animator.cancel();
        self.pending_settle = None;
        self.drag = Some(DragState {
            start_column: column,
            start_position: self.animator.offset(),
        });
        tracing::trace!(column, "drag started");
    }

    /// Track a swipe in progress. Moving the pointer left slides the next
    /// page in.
    pub fn drag_to(&mut self, column: u16) {
        let Some(drag) = self.drag else {
            return;
        };
        let delta = drag.start_column as f64 - column as f64;
        let max = (self.page_count.saturating_sub(1)) as f64 * self.width;
        let position = (drag.start_position + delta).clamp(0.0, max);
        self.animator.set_offset(position);
    }

    /// Release a swipe: snap to the nearest page. A snap back onto the
    /// page the drag started from is a cancelled transition and produces
    /// no settle report.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        let max_index = self.page_count.saturating_sub(1);
        let nearest = (self.animator.offset() / self.width).round();
        let index = (nearest.max(0.0) as usize).min(max_index);

        self.pending_settle = (index != self.current).then_some(index);
        tracing::trace!(index, cancelled = self.pending_settle.is_none(), "drag released");
        self.animator.slide_to(index as f64 * self.width);
    }
}

impl HostContainer for TerminalPager {
    fn request_transition(
        &mut self,
        index: usize,
        direction: NavigationDirection,
        animated: bool,
    ) {
        tracing::trace!(index, ?direction, animated, "transition requested");
        self.drag = None;
        self.current = index;
        self.pending_settle = Some(index);
        let target = index as f64 * self.width;
        if animated {
            self.animator.slide_to(target);
        } else {
            self.animator.set_offset(target);
        }
    }

    fn live_scroll_offset(&self) -> f64 {
        self.animator.offset() - (self.current as f64 - 1.0) * self.width
    }

    fn visible_width(&self) -> f64 {
        self.width
    }

    fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
        if !enabled {
            self.drag = None;
        }
    }

    fn sync_indicator(&mut self, current: usize, count: usize) {
        self.indicator = (current, count);
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_owned);
    }

    fn set_bottom_line_visible(&mut self, visible: bool) {
        self.bottom_line_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u16 = 80;

    fn instant_pager(pages: usize) -> TerminalPager {
        let config = SlideConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut pager = TerminalPager::new(config, WIDTH);
        pager.set_page_count(pages);
        pager
    }

    #[test]
    fn test_resting_offset_is_one_page_width() {
        let mut pager = instant_pager(3);
        pager.request_transition(1, NavigationDirection::Forward, true);
        pager.advance();

        assert_eq!(pager.position(), 80.0);
        assert_eq!(pager.live_scroll_offset(), 80.0);
    }

    #[test]
    fn test_transition_emits_one_settle() {
        let mut pager = instant_pager(3);
        pager.request_transition(2, NavigationDirection::Forward, true);

        assert_eq!(pager.advance(), Some(PagerEvent::Settled { index: 2 }));
        assert_eq!(pager.advance(), None);
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn test_redundant_transition_still_settles() {
        let mut pager = instant_pager(3);
        pager.request_transition(1, NavigationDirection::Forward, true);
        pager.advance();

        pager.request_transition(1, NavigationDirection::Reverse, true);
        assert_eq!(pager.advance(), Some(PagerEvent::Settled { index: 1 }));
    }

    #[test]
    fn test_drag_moves_offset_and_snaps_forward() {
        let mut pager = instant_pager(3);
        pager.request_transition(0, NavigationDirection::Forward, true);
        pager.advance();

        pager.begin_drag(60);
        pager.drag_to(10); // 50 columns left, past the halfway point
        assert_eq!(pager.position(), 50.0);

        pager.end_drag();
        assert_eq!(pager.advance(), Some(PagerEvent::Settled { index: 1 }));
        assert_eq!(pager.position(), 80.0);
    }

    #[test]
    fn test_short_drag_snaps_back_without_settle() {
        let mut pager = instant_pager(3);
        pager.request_transition(1, NavigationDirection::Forward, true);
        pager.advance();

        pager.begin_drag(60);
        pager.drag_to(50); // only 10 columns
        pager.end_drag();

        assert_eq!(pager.advance(), None);
        assert_eq!(pager.position(), 80.0);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_drag_clamps_at_strip_edges() {
        let mut pager = instant_pager(2);
        pager.request_transition(0, NavigationDirection::Forward, true);
        pager.advance();

        pager.begin_drag(10);
        pager.drag_to(70); // dragging right past the first page
        assert_eq!(pager.position(), 0.0);

        pager.drag_to(0);
        // One page of travel is all the two-page strip allows.
        assert!(pager.position() <= 80.0);
        pager.end_drag();
    }

    #[test]
    fn test_drag_ignored_when_swipe_disabled() {
        let mut pager = instant_pager(3);
        pager.request_transition(0, NavigationDirection::Forward, true);
        pager.advance();

        pager.set_swipe_enabled(false);
        pager.begin_drag(60);
        pager.drag_to(0);
        pager.end_drag();

        assert_eq!(pager.position(), 0.0);
        assert_eq!(pager.advance(), None);
    }

    #[test]
    fn test_resize_re_anchors_current_page() {
        let mut pager = instant_pager(3);
        pager.request_transition(2, NavigationDirection::Forward, true);
        pager.advance();

        pager.set_visible_width(100);
        assert_eq!(pager.position(), 200.0);
        assert_eq!(pager.live_scroll_offset(), 100.0);
    }
}
