use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;
use wythoff_util::error::IndexOverflow;
use wythoff_util::ti::{TiVec, TypedIndex};

wythoff_util::typed_index_struct! {
    /// ID of a group generator.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GeneratorId(pub u8);
    /// ID of a coset in a coset table.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CosetId(pub u32);
}
impl CosetId {
    /// Coset of the subgroup itself. Every word in the subgroup leads here from
    /// itself.
    pub const BASE: CosetId = CosetId(0);
}

/// List containing a value per group generator.
pub type PerGenerator<T> = TiVec<GeneratorId, T>;
/// List containing a value per coset.
pub type PerCoset<T> = TiVec<CosetId, T>;

/// Word in the generators of a group, read left to right as successive
/// applications. The empty word is the identity.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word(pub SmallVec<[GeneratorId; 8]>);
impl Word {
    /// The empty word.
    pub const IDENTITY: Self = Self(SmallVec::new_const());

    /// Constructs a word from a sequence of generators.
    pub fn new(generators: impl IntoIterator<Item = GeneratorId>) -> Self {
        Self(generators.into_iter().collect())
    }
    /// Constructs the word `generators` repeated `count` times.
    pub fn repeat(generators: &[u8], count: usize) -> Self {
        generators
            .iter()
            .copied()
            .map(GeneratorId)
            .cycle()
            .take(generators.len() * count)
            .collect()
    }

    /// Returns the word `self` followed by `other`.
    #[must_use]
    pub fn then(&self, other: &Word) -> Word {
        self.iter().chain(other.iter()).collect()
    }

    /// Returns the number of generators in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether this is the empty word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns an iterator over the generators in the word.
    pub fn iter(&self) -> impl '_ + DoubleEndedIterator<Item = GeneratorId> + ExactSizeIterator {
        self.0.iter().copied()
    }
}
impl FromIterator<GeneratorId> for Word {
    fn from_iter<T: IntoIterator<Item = GeneratorId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<const N: usize> From<[u8; N]> for Word {
    fn from(value: [u8; N]) -> Self {
        value.into_iter().map(GeneratorId).collect()
    }
}
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "e")
        } else {
            write!(f, "{}", self.iter().map(|g| g.0).join(""))
        }
    }
}

/// Error that can occur while building a group or enumerating cosets.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GroupError {
    #[error("coxeter diagram has {0} entries, which is not a triangular number")]
    BadDiagramArity(usize),
    #[error("invalid coxeter matrix: {0}")]
    BadCoxeterMatrix(&'static str),
    #[error("coxeter diagram is hyperbolic")]
    HyperbolicDiagram,
    #[error("coxeter diagram is degenerate (euclidean or singular)")]
    DegenerateDiagram,
    #[error("expected {expected} mirror distances but got {got}")]
    BadDistanceCount { expected: usize, got: usize },
    #[error("initial point lies on every mirror")]
    DegeneratePoint,

    #[error("invalid group generator {0}")]
    InvalidGenerator(GeneratorId),
    #[error("free presentation needs an even number of generators, got {0}")]
    OddFreeGenerators(u8),
    #[error("coset enumeration exceeded {0} live cosets")]
    CosetLimitExceeded(usize),
    #[error("coset table has undefined entries")]
    IncompleteTable,
    #[error("overflow ({0})")]
    Overflow(IndexOverflow),
}
impl From<IndexOverflow> for GroupError {
    fn from(value: IndexOverflow) -> Self {
        GroupError::Overflow(value)
    }
}

/// Result type returned by group construction operations.
pub type GroupResult<T> = Result<T, GroupError>;

/// Element-generator table.
///
/// 2D array containing a value for each possible coset+generator pairing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TransitionTable<T> {
    /// Number of cosets in the table.
    element_count: usize,
    /// Number of generators in the group.
    generator_count: usize,
    /// Flattened 2D array, indexed by a pair of coset ID and generator.
    contents: Vec<T>,
}
impl<T: Clone> TransitionTable<T> {
    /// Constructs a new table containing a single coset.
    pub fn new(generator_count: usize, value: T) -> Self {
        TransitionTable {
            element_count: 1,
            generator_count,
            contents: vec![value; generator_count],
        }
    }
    /// Adds a new coset to the table with every entry set to `value`.
    pub fn add_element(&mut self, value: T) -> Result<CosetId, IndexOverflow> {
        let new_element = CosetId::try_from_index(self.element_count)?;
        self.element_count += 1;
        self.contents
            .extend(std::iter::repeat_n(value, self.generator_count));
        Ok(new_element)
    }
}
impl<T> TransitionTable<T> {
    /// Returns the number of cosets in the table.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Returns a value from the table.
    #[inline]
    #[track_caller]
    pub fn get(&self, element: CosetId, generator: GeneratorId) -> &T {
        &self.contents[self.index(element, generator)]
    }
    /// Returns a mutable reference to a value in the table.
    #[track_caller]
    pub fn get_mut(&mut self, element: CosetId, generator: GeneratorId) -> &mut T {
        let index = self.index(element, generator);
        &mut self.contents[index]
    }

    /// Returns an integer index into `contents`.
    #[inline]
    #[track_caller]
    fn index(&self, element: CosetId, generator: GeneratorId) -> usize {
        assert!(
            generator.to_index() < self.generator_count,
            "generator {generator} out of range (max {max})",
            max = self.generator_count,
        );
        element.to_index() * self.generator_count + generator.to_index()
    }

    /// Builds a new table by applying `f` to each row of `self`, in the order
    /// given by `order`.
    pub fn remap_rows<U>(
        &self,
        order: &[CosetId],
        mut f: impl FnMut(&T) -> Option<U>,
    ) -> Option<TransitionTable<U>> {
        let mut contents = Vec::with_capacity(order.len() * self.generator_count);
        for &old in order {
            let start = old.to_index() * self.generator_count;
            for value in &self.contents[start..start + self.generator_count] {
                contents.push(f(value)?);
            }
        }
        Some(TransitionTable {
            element_count: order.len(),
            generator_count: self.generator_count,
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_word_repeat() {
        assert_eq!(Word::repeat(&[0, 1], 3), Word::from([0, 1, 0, 1, 0, 1]));
        assert_eq!(Word::repeat(&[2], 0), Word::IDENTITY);
    }

    #[test]
    fn test_word_display() {
        assert_eq!(Word::from([0, 2, 1]).to_string(), "021");
        assert_eq!(Word::IDENTITY.to_string(), "e");
    }

    #[test]
    fn test_transition_table_rows() {
        let mut t = TransitionTable::new(2, 0_u32);
        let c = t.add_element(5).unwrap();
        assert_eq!(c, CosetId(1));
        *t.get_mut(CosetId(0), GeneratorId(1)) = 7;
        assert_eq!(*t.get(CosetId(0), GeneratorId(1)), 7);
        assert_eq!(*t.get(CosetId(1), GeneratorId(0)), 5);

        let swapped = t.remap_rows(&[CosetId(1), CosetId(0)], |&x| Some(x)).unwrap();
        assert_eq!(*swapped.get(CosetId(0), GeneratorId(0)), 5);
        assert_eq!(*swapped.get(CosetId(1), GeneratorId(1)), 7);
    }
}
