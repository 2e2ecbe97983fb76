//! Page model: the opaque handles the navigator manages and the optional
//! interpolation capability a page can opt into.

/// Opaque handle for a page held by a [`PageRegistry`](crate::PageRegistry).
///
/// Ids are assigned at insertion and never reused. The host container
/// reports settled transitions by id, mirroring how a platform pager hands
/// back the child it landed on rather than an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) u64);

impl PageId {
    /// Raw id value, mostly useful for logging.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page hosted by the navigator.
///
/// Content lifecycle belongs to the caller; the navigator only needs a
/// display title and, optionally, the interpolation capability. Both
/// default to "not provided".
pub trait Page {
    /// Title shown when title sync is enabled.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Capability query: a page that wants per-frame progress updates
    /// during swipes returns itself here. The default opts out.
    fn as_interpolatable(&mut self) -> Option<&mut dyn Interpolatable> {
        None
    }
}

/// Continuous reaction to swipe progress (cross-fade, parallax, ...).
pub trait Interpolatable {
    /// `progress` is in `[-1, 1]`: 0 when the page is fully centered,
    /// towards -1 while it enters from the right edge, towards +1 while
    /// it exits to the left.
    fn interpolate(&mut self, progress: f64);
}
