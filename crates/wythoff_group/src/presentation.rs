use itertools::Itertools;

use super::{CoxeterMatrix, GeneratorId, GroupError, GroupResult, Word};

/// How generators relate to their inverses during coset enumeration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumerationMode {
    /// Every generator is an involution, so `g g` is implicitly a relator.
    #[default]
    Coxeter,
    /// Generators come in pairs: generator `2k+1` is the inverse of `2k`. No
    /// other relations are implied.
    Free,
}

/// Finite group presentation: generators and relators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Presentation {
    generator_count: u8,
    relators: Vec<Word>,
    mode: EnumerationMode,
}
impl Presentation {
    /// Constructs the standard presentation of a Coxeter group, with relators
    /// `(i j)^m` for each pair of mirrors.
    pub fn coxeter(matrix: &CoxeterMatrix) -> Self {
        Self {
            generator_count: matrix.rank(),
            relators: matrix.relators(),
            mode: EnumerationMode::Coxeter,
        }
    }

    /// Constructs a presentation whose generators are paired with their
    /// inverses.
    pub fn free(generator_count: u8, relators: Vec<Word>) -> GroupResult<Self> {
        if generator_count % 2 != 0 {
            return Err(GroupError::OddFreeGenerators(generator_count));
        }
        let ret = Self {
            generator_count,
            relators: vec![],
            mode: EnumerationMode::Free,
        };
        ret.with_relators(relators)
    }

    /// Appends additional relators.
    pub fn with_relators(mut self, relators: impl IntoIterator<Item = Word>) -> GroupResult<Self> {
        for r in relators {
            self.validate_word(&r)?;
            self.relators.push(r);
        }
        Ok(self)
    }

    /// Returns an error if the word uses a generator that does not exist.
    pub fn validate_word(&self, word: &Word) -> GroupResult<()> {
        match word.iter().find(|g| g.0 >= self.generator_count) {
            Some(g) => Err(GroupError::InvalidGenerator(g)),
            None => Ok(()),
        }
    }

    /// Returns the number of generators.
    pub fn generator_count(&self) -> u8 {
        self.generator_count
    }
    /// Returns an iterator over the generators.
    pub fn generators(&self) -> impl Iterator<Item = GeneratorId> + use<> {
        (0..self.generator_count).map(GeneratorId)
    }
    /// Returns the enumeration mode.
    pub fn mode(&self) -> EnumerationMode {
        self.mode
    }
    /// Returns the explicitly given relators.
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Returns every relator, including the implied `g g` relators in Coxeter
    /// mode.
    pub fn all_relators(&self) -> Vec<Word> {
        let implied = match self.mode {
            EnumerationMode::Coxeter => self.generators().map(|g| Word::new([g, g])).collect(),
            EnumerationMode::Free => vec![],
        };
        implied
            .into_iter()
            .chain(self.relators.iter().cloned())
            .unique()
            .collect()
    }

    /// Returns the inverse of a generator.
    pub fn inverse(&self, g: GeneratorId) -> GeneratorId {
        match self.mode {
            EnumerationMode::Coxeter => g,
            EnumerationMode::Free => GeneratorId(g.0 ^ 1),
        }
    }
    /// Returns the inverse of a word.
    pub fn inverse_word(&self, word: &Word) -> Word {
        word.iter().rev().map(|g| self.inverse(g)).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CoxeterDiagram;

    #[test]
    fn test_coxeter_presentation() {
        let m = CoxeterDiagram::new([4_u16, 2, 3]).unwrap().coxeter_matrix().unwrap();
        let p = Presentation::coxeter(&m);
        assert_eq!(p.generator_count(), 3);
        assert_eq!(p.inverse(GeneratorId(2)), GeneratorId(2));
        assert_eq!(p.all_relators().len(), 6);
        assert_eq!(p.all_relators()[0], Word::from([0, 0]));
    }

    #[test]
    fn test_free_presentation() {
        let p = Presentation::free(4, vec![Word::repeat(&[0], 3)]).unwrap();
        assert_eq!(p.inverse(GeneratorId(0)), GeneratorId(1));
        assert_eq!(p.inverse(GeneratorId(3)), GeneratorId(2));
        assert_eq!(
            p.inverse_word(&Word::from([0, 2, 2])),
            Word::from([3, 3, 1]),
        );
        assert_eq!(p.all_relators(), vec![Word::from([0, 0, 0])]);

        assert_eq!(Presentation::free(3, vec![]), Err(GroupError::OddFreeGenerators(3)));
        assert_eq!(
            Presentation::free(2, vec![Word::from([0, 2])]),
            Err(GroupError::InvalidGenerator(GeneratorId(2))),
        );
    }
}
