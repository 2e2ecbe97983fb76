//! Swipe progress math.
//!
//! Pure functions over the host container's live scroll offset. Everything
//! here is O(1) and allocation-free; [`ProgressSample::capture`] runs once
//! per scroll tick during a gesture.
//!
//! Coordinate convention: the host keeps the page either side of the
//! current one pre-rendered, so the raw offset for a page at rest is one
//! page width, not zero. [`scroll_position`] folds that offset-by-one back
//! into an absolute position where page `i` at rest sits at `i * width`.

/// Absolute scroll position in host layout units.
///
/// `live_offset` is the host's raw offset; it equals `page_width` while the
/// current page is at rest, less while the previous page slides in, more
/// while the next one does.
#[inline]
pub fn scroll_position(current_index: usize, page_width: f64, live_offset: f64) -> f64 {
    (current_index as f64 - 1.0) * page_width + live_offset
}

/// Overall traversal progress across the whole deck, 0 at the first page
/// and 1 at the last.
///
/// Returns `f64::NAN` when the deck has fewer than two pages or the width
/// is degenerate; callers treat that as "no meaningful progress".
#[inline]
pub fn total_progress(x: f64, page_width: f64, page_count: usize) -> f64 {
    if page_count <= 1 || page_width <= 0.0 {
        return f64::NAN;
    }
    x / (page_width * (page_count as f64 - 1.0))
}

/// Signed progress of page `page` relative to the centered position,
/// saturated to `[-1, 1]`.
///
/// 0 means fully centered, -1..0 an entrance from the right edge, 0..1 an
/// exit towards the left. `page` is signed because the slot before index 0
/// is page -1.
#[inline]
pub fn page_progress(x: f64, page: i64, page_width: f64) -> f64 {
    if page_width <= 0.0 {
        return 0.0;
    }
    ((x - page as f64 * page_width) / page_width).clamp(-1.0, 1.0)
}

/// Progress of the previous/current/next page slots, captured from one
/// scroll position. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSample {
    pub previous: f64,
    pub current: f64,
    pub next: f64,
}

impl ProgressSample {
    pub fn capture(current_index: usize, page_width: f64, live_offset: f64) -> Self {
        let x = scroll_position(current_index, page_width, live_offset);
        let current = current_index as i64;
        Self {
            previous: page_progress(x, current - 1, page_width),
            current: page_progress(x, current, page_width),
            next: page_progress(x, current + 1, page_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 80.0;

    #[test]
    fn test_current_page_centered_at_rest() {
        // At rest the live offset equals one page width.
        for k in 0..5 {
            let x = scroll_position(k, WIDTH, WIDTH);
            assert_eq!(page_progress(x, k as i64, WIDTH), 0.0, "page {k}");
        }
    }

    #[test]
    fn test_neighbors_at_rest() {
        let x = scroll_position(2, WIDTH, WIDTH);
        // Previous page has fully exited left, next not yet entered.
        assert_eq!(page_progress(x, 1, WIDTH), 1.0);
        assert_eq!(page_progress(x, 3, WIDTH), -1.0);
    }

    #[test]
    fn test_progress_saturates() {
        let x = scroll_position(0, WIDTH, WIDTH);
        assert_eq!(page_progress(x, 10, WIDTH), -1.0);
        assert_eq!(page_progress(x, -10, WIDTH), 1.0);
        // Mid-swipe values stay strictly inside the band.
        let mid = scroll_position(0, WIDTH, WIDTH + WIDTH / 2.0);
        let p = page_progress(mid, 0, WIDTH);
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn test_half_swipe_towards_next() {
        // Halfway through a forward swipe from page 1 to page 2.
        let x = scroll_position(1, WIDTH, WIDTH + WIDTH / 2.0);
        let sample = ProgressSample {
            previous: page_progress(x, 0, WIDTH),
            current: page_progress(x, 1, WIDTH),
            next: page_progress(x, 2, WIDTH),
        };
        assert_eq!(sample.previous, 1.0);
        assert_eq!(sample.current, 0.5);
        assert_eq!(sample.next, -0.5);
    }

    #[test]
    fn test_capture_matches_slot_formulas() {
        let sample = ProgressSample::capture(1, WIDTH, WIDTH * 1.25);
        let x = scroll_position(1, WIDTH, WIDTH * 1.25);
        assert_eq!(sample.previous, page_progress(x, 0, WIDTH));
        assert_eq!(sample.current, page_progress(x, 1, WIDTH));
        assert_eq!(sample.next, page_progress(x, 2, WIDTH));
    }

    #[test]
    fn test_previous_slot_of_first_page() {
        // current_index 0 probes page -1; must not panic or wrap.
        let sample = ProgressSample::capture(0, WIDTH, WIDTH);
        assert_eq!(sample.previous, 1.0);
        assert_eq!(sample.current, 0.0);
        assert_eq!(sample.next, -1.0);
    }

    #[test]
    fn test_total_progress_endpoints() {
        let count = 4;
        let first = scroll_position(0, WIDTH, WIDTH);
        let last = scroll_position(3, WIDTH, WIDTH);
        assert_eq!(total_progress(first, WIDTH, count), 0.0);
        assert_eq!(total_progress(last, WIDTH, count), 1.0);
    }

    #[test]
    fn test_total_progress_sentinel() {
        assert!(total_progress(0.0, WIDTH, 1).is_nan());
        assert!(total_progress(0.0, WIDTH, 0).is_nan());
        assert!(total_progress(0.0, 0.0, 3).is_nan());
    }
}
