//! # Dense Columns
//!
//! Append-only backing storage for a single component kind.
//!
//! The column uses a dense array strategy:
//! - Values are pushed, never removed or reordered
//! - Access is O(1) via dense index
//! - Iteration is cache-friendly (contiguous memory)

use super::handle::DenseIndex;

/// Growable storage for a single component type.
///
/// This storage guarantees:
/// - A dense index, once returned by [`DenseColumn::push`], stays valid forever
/// - O(1) access by dense index
/// - No holes: every index below [`DenseColumn::len`] holds a value
///
/// # Example
///
/// ```rust,ignore
/// let mut column: DenseColumn<Vec2> = DenseColumn::new();
/// let index = column.push(Vec2::new(1.0, 2.0));
/// assert_eq!(column.get(index), Some(&Vec2::new(1.0, 2.0)));
/// ```
#[derive(Clone, Debug)]
pub struct DenseColumn<T> {
    /// The dense array of values.
    data: Vec<T>,
}

impl<T> DenseColumn<T> {
    /// Creates an empty column.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Returns the number of values ever pushed.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been pushed yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a value and returns its dense index.
    ///
    /// # Panics
    ///
    /// Panics if the column already holds `u32::MAX` values.
    #[inline]
    pub fn push(&mut self, value: T) -> DenseIndex {
        let offset = u32::try_from(self.data.len()).unwrap_or_else(|_| {
            panic!("dense column exhausted the u32 index space")
        });
        self.data.push(value);
        DenseIndex::new(offset)
    }

    /// Gets a value by dense index.
    ///
    /// # Returns
    ///
    /// Reference to the value, or None if the index was never handed out.
    #[inline]
    #[must_use]
    pub fn get(&self, index: DenseIndex) -> Option<&T> {
        self.data.get(index.index())
    }
}

impl<T: Default> DenseColumn<T> {
    /// Appends a default value and returns its dense index.
    #[inline]
    pub fn push_default(&mut self) -> DenseIndex {
        self.push(T::default())
    }
}

impl<T> std::ops::Index<DenseIndex> for DenseColumn<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: DenseIndex) -> &T {
        &self.data[index.index()]
    }
}

impl<T> std::ops::IndexMut<DenseIndex> for DenseColumn<T> {
    #[inline]
    fn index_mut(&mut self, index: DenseIndex) -> &mut T {
        &mut self.data[index.index()]
    }
}

impl<T> Default for DenseColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}
