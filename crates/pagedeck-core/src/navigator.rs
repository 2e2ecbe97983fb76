//! The paging controller: page registry, navigation, and progress dispatch
//! glued onto an injected host container.

use std::rc::Weak;

use crate::config::NavigatorConfig;
use crate::host::{HostContainer, NavigationDirection};
use crate::page::{Page, PageId};
use crate::progress::{self, ProgressSample};
use crate::registry::PageRegistry;

/// Outbound notification target, held non-owning: dropping the observer
/// elsewhere silently stops notifications.
pub trait SettleObserver<P: Page> {
    /// Fired once per completed transition, programmatic or gesture-driven.
    fn page_settled(&self, page: &P, index: usize);
}

/// Controller wrapping a [`HostContainer`] with ordered page management,
/// programmatic navigation, indicator/title sync, and per-swipe progress
/// dispatch to [`Interpolatable`](crate::Interpolatable) pages.
///
/// Single-threaded by design: every method is synchronous, and the only
/// asynchronous piece is the host's transition animation. `go_to` updates
/// `current_index` optimistically when it *requests* the transition, so
/// between the request and the host's settle report the index names the
/// target page while the source page is still on screen.
pub struct PageNavigator<P: Page, H: HostContainer> {
    registry: PageRegistry<P>,
    host: H,
    config: NavigatorConfig,
    delegate: Option<Weak<dyn SettleObserver<P>>>,
}

impl<P: Page, H: HostContainer> PageNavigator<P, H> {
    pub fn new(host: H, config: NavigatorConfig) -> Self {
        let mut navigator = Self {
            registry: PageRegistry::new(),
            host,
            config,
            delegate: None,
        };
        navigator.host.set_swipe_enabled(navigator.config.enable_swipe);
        navigator
            .host
            .set_bottom_line_visible(navigator.config.show_bottom_line);
        navigator
    }

    pub fn set_delegate(&mut self, delegate: Weak<dyn SettleObserver<P>>) {
        self.delegate = Some(delegate);
    }

    /// Append pages in display order. The very first page added to an
    /// empty deck is requested as the displayed page right away; its
    /// settle report then flows through [`Self::handle_settle`] like any
    /// completed navigation.
    pub fn add(&mut self, pages: impl IntoIterator<Item = P>) {
        for page in pages {
            self.add_page(page);
        }
    }

    fn add_page(&mut self, page: P) {
        let id = self.registry.push(page);
        if self.registry.len() == 1 {
            tracing::debug!(%id, "first page added, activating");
            self.host
                .request_transition(0, NavigationDirection::Forward, true);
            self.sync_title();
        }
        self.sync_indicator();
    }

    /// Navigate to the start page from the active configuration.
    pub fn start(&mut self) {
        self.go_to(self.config.start_page);
    }

    /// Request an animated transition to `index`. Silently does nothing
    /// when `index` is out of range. `current_index` is updated before the
    /// animation completes; the delegate fires on the settle report.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.registry.len() {
            return;
        }
        let direction = if index > self.registry.current_index() {
            NavigationDirection::Forward
        } else {
            NavigationDirection::Reverse
        };
        tracing::debug!(index, ?direction, "navigating");
        self.registry.set_current_index(index);
        self.host.request_transition(index, direction, true);
        self.sync_title();
    }

    pub fn move_forward(&mut self) {
        self.go_to(self.registry.current_index() + 1);
    }

    pub fn move_back(&mut self) {
        if let Some(index) = self.registry.current_index().checked_sub(1) {
            self.go_to(index);
        }
    }

    /// Settle report from the host: a transition completed on `page`.
    ///
    /// Unknown ids are ignored. Always notifies the delegate, including
    /// when the settled page is already current (a redundant programmatic
    /// navigation still produces exactly one completion).
    pub fn handle_settle(&mut self, page: PageId) {
        let Some(index) = self.registry.index_of(page) else {
            tracing::debug!(%page, "settle report for unknown page");
            return;
        };
        tracing::debug!(%page, index, "page settled");
        self.registry.set_current_index(index);
        self.sync_title();
        self.sync_indicator();
        if let Some(observer) = self.delegate.as_ref().and_then(Weak::upgrade) {
            if let Some(settled) = self.registry.page(index) {
                observer.page_settled(settled, index);
            }
        }
    }

    /// Recompute progress for the previous/current/next slots and push it
    /// to the pages in that window that opt into interpolation.
    ///
    /// Called by the host glue on every scroll tick; O(1), no allocation.
    pub fn update_page_progresses(&mut self) {
        let width = self.host.visible_width();
        if width <= 0.0 || self.registry.is_empty() {
            return;
        }
        let current = self.registry.current_index();
        let sample = ProgressSample::capture(current, width, self.host.live_scroll_offset());

        if let Some(previous) = current.checked_sub(1) {
            Self::dispatch(&mut self.registry, previous, sample.previous);
        }
        Self::dispatch(&mut self.registry, current, sample.current);
        Self::dispatch(&mut self.registry, current + 1, sample.next);
    }

    fn dispatch(registry: &mut PageRegistry<P>, index: usize, value: f64) {
        if let Some(target) = registry.page_mut(index).and_then(P::as_interpolatable) {
            target.interpolate(value);
        }
    }

    /// Traversal progress across the whole deck; `NAN` with fewer than
    /// two pages.
    pub fn total_progress(&self) -> f64 {
        let width = self.host.visible_width();
        let x = progress::scroll_position(
            self.registry.current_index(),
            width,
            self.host.live_scroll_offset(),
        );
        progress::total_progress(x, width, self.registry.len())
    }

    /// Pass-through gesture toggle.
    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        tracing::debug!(enabled, "swipe toggled");
        self.config.enable_swipe = enabled;
        self.host.set_swipe_enabled(enabled);
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &PageRegistry<P> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PageRegistry<P> {
        &mut self.registry
    }

    pub fn current_index(&self) -> usize {
        self.registry.current_index()
    }

    /// Data-source query for the host: the page before `id` in display
    /// order, if any.
    pub fn page_before(&self, id: PageId) -> Option<PageId> {
        self.registry.page_before(id)
    }

    /// Data-source query for the host: the page after `id` in display
    /// order, if any.
    pub fn page_after(&self, id: PageId) -> Option<PageId> {
        self.registry.page_after(id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn sync_title(&mut self) {
        if !self.config.set_navigation_title {
            return;
        }
        let title = self.registry.current_page().and_then(P::title);
        self.host.set_title(title);
    }

    fn sync_indicator(&mut self) {
        if self.config.show_page_control {
            self.host
                .sync_indicator(self.registry.current_index(), self.registry.len());
        } else {
            self.host.sync_indicator(0, 0);
        }
    }
}
