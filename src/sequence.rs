use crate::error::DemoError;

/// Read-only wrapper over an owned sequence with bounds-checked access.
///
/// The length is captured once at construction and every lookup is checked
/// against it. Indices are `usize`, so there is no negative index to reject;
/// only the upper bound is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSequence<T> {
    items: Vec<T>,
    count: usize,
}

impl<T> BoundedSequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        tracing::debug!(count, "constructed bounded sequence");
        Self { items, count }
    }

    /// Length recorded at construction.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Zero-based lookup. Fails with [`DemoError::IndexOutOfRange`] when
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, DemoError> {
        match self.items.get(index) {
            Some(value) if index < self.count => Ok(value),
            _ => {
                tracing::debug!(index, count = self.count, "rejected out-of-range lookup");
                Err(DemoError::IndexOutOfRange {
                    index,
                    count: self.count,
                })
            }
        }
    }
}

impl<T> From<Vec<T>> for BoundedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
