//! Page index over a fixed-length deck.

/// Current page position. Only moves forward and stops at the last page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    index: usize,
    len: usize,
}

impl Pagination {
    /// Start at the first of `len` pages. `len` must be at least one.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "pagination over an empty deck");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Move to the next page. The last page absorbs further calls.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }
}
