//! Ordered page storage with current-index tracking.

use crate::page::{Page, PageId};

struct Entry<P> {
    id: PageId,
    page: P,
}

/// Append-only ordered list of pages plus the index of the page last
/// reported as settled.
///
/// Insertion order is display order. `current_index` is only meaningful
/// while the registry is non-empty; it is mutated exclusively by the
/// navigator (optimistic update on navigation, authoritative update on
/// settle).
pub struct PageRegistry<P: Page> {
    entries: Vec<Entry<P>>,
    current_index: usize,
    next_id: u64,
}

impl<P: Page> Default for PageRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> PageRegistry<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_index: 0,
            next_id: 1,
        }
    }

    /// Append a page and return its handle.
    pub fn push(&mut self, page: P) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, page });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the settled page. 0 while the registry is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Position of a page in display order.
    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<PageId> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn page(&self, index: usize) -> Option<&P> {
        self.entries.get(index).map(|e| &e.page)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut P> {
        self.entries.get_mut(index).map(|e| &mut e.page)
    }

    /// Page immediately before `id` in display order. No wraparound.
    pub fn page_before(&self, id: PageId) -> Option<PageId> {
        let index = self.index_of(id)?;
        self.id_at(index.checked_sub(1)?)
    }

    /// Page immediately after `id` in display order. No wraparound.
    pub fn page_after(&self, id: PageId) -> Option<PageId> {
        let index = self.index_of(id)?;
        self.id_at(index + 1)
    }

    pub fn current_page(&self) -> Option<&P> {
        self.page(self.current_index)
    }

    pub fn previous_page(&self) -> Option<&P> {
        self.page(self.current_index.checked_sub(1)?)
    }

    pub fn next_page(&self) -> Option<&P> {
        self.page(self.current_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;
    impl Page for Blank {}

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut registry = PageRegistry::new();
        let a = registry.push(Blank);
        let b = registry.push(Blank);
        let c = registry.push(Blank);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index_of(a), Some(0));
        assert_eq!(registry.index_of(b), Some(1));
        assert_eq!(registry.index_of(c), Some(2));
        assert_eq!(registry.id_at(1), Some(b));
    }

    #[test]
    fn test_adjacency_has_no_wraparound() {
        let mut registry = PageRegistry::new();
        let a = registry.push(Blank);
        let b = registry.push(Blank);
        let c = registry.push(Blank);

        assert_eq!(registry.page_before(a), None);
        assert_eq!(registry.page_before(b), Some(a));
        assert_eq!(registry.page_after(b), Some(c));
        assert_eq!(registry.page_after(c), None);
    }

    #[test]
    fn test_unknown_id_lookups() {
        let mut registry = PageRegistry::new();
        registry.push(Blank);

        let unknown = PageId(99);
        assert_eq!(registry.index_of(unknown), None);
        assert_eq!(registry.page_before(unknown), None);
        assert_eq!(registry.page_after(unknown), None);
    }

    #[test]
    fn test_neighbor_accessors_at_boundaries() {
        let mut registry = PageRegistry::new();
        registry.push(Blank);
        registry.push(Blank);

        assert!(registry.previous_page().is_none());
        assert!(registry.next_page().is_some());

        registry.set_current_index(1);
        assert!(registry.previous_page().is_some());
        assert!(registry.next_page().is_none());
    }
}
