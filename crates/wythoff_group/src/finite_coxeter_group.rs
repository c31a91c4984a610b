//! Named finite Coxeter groups.

use std::fmt;

use itertools::Itertools;

use super::{CoxeterDiagram, CoxeterGroup, CoxeterMatrix, Dihedral, GroupResult, Presentation};

/// [Finite Coxeter group](https://w.wiki/7PLd).
///
/// See also: [Coxeter-Dynkin diagram](https://w.wiki/7PLe)
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FiniteCoxeterGroup {
    A(u8),
    B(u8),
    D(u8),
    F4,
    G2,
    H2,
    H3,
    H4,
    I(u16),
}
impl fmt::Display for FiniteCoxeterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(n) => write!(f, "A{n}"),
            Self::B(n) => write!(f, "B{n}"),
            Self::D(n) => write!(f, "D{n}"),
            Self::F4 => write!(f, "F4"),
            Self::G2 => write!(f, "G2"),
            Self::H2 => write!(f, "H2"),
            Self::H3 => write!(f, "H3"),
            Self::H4 => write!(f, "H4"),
            Self::I(n) => write!(f, "I2({n})"),
        }
    }
}
impl FiniteCoxeterGroup {
    /// Returns the number of mirror generators for the group.
    pub fn generator_count(self) -> u8 {
        match self {
            Self::A(n) | Self::B(n) | Self::D(n) => n,
            Self::F4 | Self::H4 => 4,
            Self::H3 => 3,
            Self::G2 | Self::H2 | Self::I(_) => 2,
        }
    }

    /// Returns an element of the group's Coxeter matrix.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[track_caller]
    pub fn coxeter_matrix_element(self, mut i: u8, mut j: u8) -> Dihedral {
        if j < i {
            std::mem::swap(&mut i, &mut j);
        }
        assert!(j < self.generator_count(), "index out of range");

        if i == j {
            return Dihedral::ONE;
        }

        let m: u16 = match self {
            // Linear diagrams
            Self::A(_) if j == 1 => 3, // (i, j) = (0, 1)
            Self::B(_) if j == 1 => 4, // (i, j) = (0, 1)
            Self::H2 | Self::H3 | Self::H4 if j == 1 => 5,

            // Branched
            Self::D(_) if i == 0 && j == 2 => 3,

            Self::F4 if j == 1 => 3,
            Self::F4 if i == 1 && j == 2 => 4,

            Self::G2 => 6,
            Self::I(n) => n,

            _ if i > 0 && i + 1 == j => 3,
            _ => 2, // no edge
        };
        m.into()
    }

    /// Returns the group's Coxeter matrix.
    pub fn coxeter_matrix(self) -> GroupResult<CoxeterMatrix> {
        CoxeterMatrix::from_fn(self.generator_count(), |i, j| {
            self.coxeter_matrix_element(i, j)
        })
    }
    /// Returns the group's Coxeter diagram. Only ranks 3 to 5 have one.
    pub fn diagram(self) -> GroupResult<CoxeterDiagram> {
        CoxeterDiagram::new(
            (0..self.generator_count())
                .tuple_combinations()
                .map(|(i, j)| self.coxeter_matrix_element(i, j)),
        )
    }
    /// Returns the mirrors and reflections of the group.
    pub fn coxeter_group(self) -> GroupResult<CoxeterGroup> {
        CoxeterGroup::new(self.coxeter_matrix()?)
    }
    /// Returns the standard Coxeter presentation of the group.
    pub fn presentation(self) -> GroupResult<Presentation> {
        Ok(Presentation::coxeter(&self.coxeter_matrix()?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{EnumerationLimits, enumerate_cosets};

    #[test]
    fn test_group_orders() {
        use FiniteCoxeterGroup::*;

        let cases = [
            (I(7), 14),
            (H2, 10),
            (A(3), 24),
            (B(3), 48),
            (H3, 120),
            (A(4), 120),
            (D(4), 192),
            (B(4), 384),
            (A(5), 720),
            (F4, 1152),
            (D(5), 1920),
        ];
        for (g, order) in cases {
            let table = enumerate_cosets(&g.presentation().unwrap(), &[], &EnumerationLimits::default())
                .unwrap();
            assert_eq!(table.len(), order, "order of {g}");
        }
    }

    #[test]
    fn test_diagrams() {
        let b3 = FiniteCoxeterGroup::B(3).diagram().unwrap();
        assert_eq!(b3, CoxeterDiagram::new([4_u16, 2, 3]).unwrap());

        let d4 = FiniteCoxeterGroup::D(4).diagram().unwrap();
        assert_eq!(d4, CoxeterDiagram::new([2_u16, 3, 2, 3, 2, 3]).unwrap());

        assert!(FiniteCoxeterGroup::G2.diagram().is_err());
    }

    #[test]
    fn test_geometry() {
        for g in [
            FiniteCoxeterGroup::A(4),
            FiniteCoxeterGroup::B(5),
            FiniteCoxeterGroup::F4,
            FiniteCoxeterGroup::H4,
        ] {
            assert!(g.coxeter_group().is_ok(), "{g} should be spherical");
        }
    }
}
