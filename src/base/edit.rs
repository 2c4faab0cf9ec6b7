use text_size::{TextRange, TextSize};

/// A single contiguous text mutation: `old_length` bytes at `position` were
/// replaced by `new_length` bytes.
///
/// Only `position` matters to stack breakdown; everything before it is
/// assumed unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEdit {
    pub position: TextSize,
    pub old_length: TextSize,
    pub new_length: TextSize,
}

impl InputEdit {
    pub fn new(position: TextSize, old_length: TextSize, new_length: TextSize) -> Self {
        Self {
            position,
            old_length,
            new_length,
        }
    }

    /// Edit replacing the text in `range` with `new_length` bytes.
    pub fn replace(range: TextRange, new_length: TextSize) -> Self {
        Self::new(range.start(), range.len(), new_length)
    }

    pub fn insert(position: TextSize, new_length: TextSize) -> Self {
        Self::new(position, TextSize::new(0), new_length)
    }

    pub fn delete(range: TextRange) -> Self {
        Self::new(range.start(), range.len(), TextSize::new(0))
    }

    /// Range of the replaced text, in old coordinates.
    pub fn old_range(&self) -> TextRange {
        TextRange::at(self.position, self.old_length)
    }

    /// Range of the inserted text, in new coordinates.
    pub fn new_range(&self) -> TextRange {
        TextRange::at(self.position, self.new_length)
    }
}
