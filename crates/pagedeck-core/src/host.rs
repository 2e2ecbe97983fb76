//! Seam between the navigator and the platform paging widget.

/// Which way the host animates a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Target is after the current page; content slides in from the right.
    Forward,
    /// Target is at or before the current page.
    Reverse,
}

/// The platform paging widget the navigator drives.
///
/// Injected at construction rather than discovered by scanning a view
/// tree. The host owns gestures and transition animation; it reports
/// completed transitions back through
/// [`PageNavigator::handle_settle`](crate::PageNavigator::handle_settle).
///
/// Offset contract: `live_scroll_offset` is the raw offset of the host's
/// internal scroll surface, which pre-renders one page either side of the
/// current one. At rest it equals `visible_width()`; the progress math in
/// [`crate::progress`] depends on exactly this convention.
pub trait HostContainer {
    /// Ask the host to animate to the page at `index`. Returns
    /// immediately; completion arrives later as a settle report.
    fn request_transition(&mut self, index: usize, direction: NavigationDirection, animated: bool);

    /// Raw scroll offset of the paging surface, in layout units.
    fn live_scroll_offset(&self) -> f64;

    /// Width of one page, assumed constant across pages.
    fn visible_width(&self) -> f64;

    /// Pass-through gesture toggle; the host keeps no extra state.
    fn set_swipe_enabled(&mut self, enabled: bool);

    /// Update the page-indicator widget. `count == 0` hides it.
    fn sync_indicator(&mut self, current: usize, count: usize);

    /// Update the navigation title, if the host displays one.
    fn set_title(&mut self, title: Option<&str>);

    /// Show or hide the decorative bottom line.
    fn set_bottom_line_visible(&mut self, visible: bool);
}
