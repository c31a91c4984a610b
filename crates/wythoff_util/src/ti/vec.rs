//! `Vec` indexed by a [`TypedIndex`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, Index, IndexMut};

use super::TypedIndex;
use crate::error::IndexOverflow;

/// `Vec<E>` that can only be indexed by `I`.
///
/// Collecting or converting into a `TiVec` drops anything past
/// `I::MAX_INDEX`; use [`TiVec::push()`] to get an error instead.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TiVec<I, E> {
    values: Vec<E>,
    _index: PhantomData<I>,
}

impl<I, E> TiVec<I, E> {
    /// Returns an empty vector.
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            _index: PhantomData,
        }
    }
}

impl<I: TypedIndex, E> TiVec<I, E> {
    /// Appends a value and returns its index.
    pub fn push(&mut self, value: E) -> Result<I, IndexOverflow> {
        let i = I::try_from_index(self.values.len())?;
        self.values.push(value);
        Ok(i)
    }

    /// Returns the value at `i`, if there is one.
    pub fn get(&self, i: I) -> Option<&E> {
        self.values.get(i.to_index())
    }

    /// Returns every index, in order.
    pub fn iter_keys(&self) -> impl Iterator<Item = I> + use<I, E> {
        I::iter(self.values.len())
    }
    /// Returns every value, in index order.
    pub fn iter_values(&self) -> std::slice::Iter<'_, E> {
        self.values.iter()
    }
    /// Returns every index alongside its value.
    pub fn iter(&self) -> impl Iterator<Item = (I, &E)> {
        std::iter::zip(self.iter_keys(), &self.values)
    }
}

impl<I, E> Default for TiVec<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, E: fmt::Debug> fmt::Debug for TiVec<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl<I, E> Deref for TiVec<I, E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.values
    }
}

impl<I: TypedIndex, E> Index<I> for TiVec<I, E> {
    type Output = E;

    #[track_caller]
    fn index(&self, i: I) -> &E {
        &self.values[i.to_index()]
    }
}
impl<I: TypedIndex, E> IndexMut<I> for TiVec<I, E> {
    #[track_caller]
    fn index_mut(&mut self, i: I) -> &mut E {
        &mut self.values[i.to_index()]
    }
}

impl<I: TypedIndex, E> FromIterator<E> for TiVec<I, E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let limit = I::MAX_INDEX.saturating_add(1);
        Self {
            values: iter.into_iter().take(limit).collect(),
            _index: PhantomData,
        }
    }
}
impl<I: TypedIndex, E> From<Vec<E>> for TiVec<I, E> {
    fn from(values: Vec<E>) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    crate::typed_index_struct! {
        struct FaceId(u8);
    }

    #[test]
    fn test_push() {
        let mut faces = TiVec::<FaceId, &str>::new();
        assert_eq!(faces.push("square"), Ok(FaceId(0)));
        assert_eq!(faces.push("hexagon"), Ok(FaceId(1)));
        assert_eq!(faces[FaceId(1)], "hexagon");
        assert_eq!(faces.get(FaceId(2)), None);
        assert_eq!(format!("{faces:?}"), r#"["square", "hexagon"]"#);
    }

    #[test]
    fn test_full() {
        let mut v: TiVec<FaceId, u32> = (0..1000).collect();
        assert_eq!(v.len(), 256);
        assert_eq!(v.push(0), Err(IndexOverflow::new::<FaceId>()));
        assert_eq!(v.iter_keys().last(), Some(FaceId(255)));
    }

    #[test]
    fn test_iter_pairs() {
        let v: TiVec<FaceId, char> = vec!['x', 'y'].into();
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(pairs, vec![(FaceId(0), &'x'), (FaceId(1), &'y')]);
    }
}
