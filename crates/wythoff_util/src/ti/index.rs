use std::fmt;
use std::hash::Hash;

use crate::error::IndexOverflow;

/// Integer newtype used to index a [`super::TiVec`].
///
/// Implemented by [`typed_index_struct!`](crate::typed_index_struct).
pub trait TypedIndex:
    'static + fmt::Debug + fmt::Display + Copy + Eq + Ord + Hash + Send + Sync
{
    /// Largest value the index can hold.
    const MAX_INDEX: usize;
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Converts the index to a `usize`.
    fn to_index(self) -> usize;

    /// Converts a `usize` to an index, failing if it is too large.
    fn try_from_index(index: usize) -> Result<Self, IndexOverflow>;

    /// Returns every index below `count`, stopping early at [`Self::MAX_INDEX`].
    fn iter(count: usize) -> impl Iterator<Item = Self> {
        (0..count).map_while(|i| Self::try_from_index(i).ok())
    }
}
