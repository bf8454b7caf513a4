//! Cyclic cursor over a slide list of fixed length

/// Index of the visible slide in a list of `len` slides.
///
/// The index is always in `[0, len - 1]`; an empty list has no index and
/// every movement is a no-op. Lists with a single slide never move either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Creates a cursor, clamping `initial` into range.
    pub fn new(len: usize, initial: usize) -> Self {
        Self {
            index: initial.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether advance/retreat can change anything.
    pub fn can_move(&self) -> bool {
        self.len > 1
    }

    /// Moves to the next slide, wrapping at the end. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Moves to the previous slide, wrapping at the start. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    /// Jumps to `target` if it is in range. Out-of-range targets are ignored
    /// and `false` is returned.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            return false;
        }
        self.index = target;
        true
    }

    /// Adapts to a new list length, keeping the index if it still fits.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// One-based `"current / total"` label, `None` for an empty list.
    pub fn position_label(&self) -> Option<String> {
        self.index()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }
}
