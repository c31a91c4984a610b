//! Named uniform polytopes.

use std::fmt;

use wythoff_group::{CoxeterDiagram, Dihedral, FiniteCoxeterGroup, Word};

use crate::polytope::dynkin_distances;
use crate::{Polytope, PolytopeBuilder, PolytopeFamily, PolytopeResult, SNUB_24_CELL_DIAGRAM};

/// Well-known polytope with a fixed diagram and initial point.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    TruncatedCube,
    Cuboctahedron,
    Rhombicuboctahedron,
    SnubTetrahedron,
    SnubCube,
    SnubDodecahedron,
    SmallStellatedDodecahedron,
    Tesseract,
    Cell16,
    Cell24,
    Cell120,
    Cell600,
    Snub24Cell,
    Simplex5,
    Cube5,
}
impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
            Self::TruncatedCube => "truncated cube",
            Self::Cuboctahedron => "cuboctahedron",
            Self::Rhombicuboctahedron => "rhombicuboctahedron",
            Self::SnubTetrahedron => "snub tetrahedron",
            Self::SnubCube => "snub cube",
            Self::SnubDodecahedron => "snub dodecahedron",
            Self::SmallStellatedDodecahedron => "small stellated dodecahedron",
            Self::Tesseract => "tesseract",
            Self::Cell16 => "16-cell",
            Self::Cell24 => "24-cell",
            Self::Cell120 => "120-cell",
            Self::Cell600 => "600-cell",
            Self::Snub24Cell => "snub 24-cell",
            Self::Simplex5 => "5-simplex",
            Self::Cube5 => "5-cube",
        };
        write!(f, "{s}")
    }
}
impl Preset {
    /// Every preset, smallest rank first.
    pub const ALL: [Self; 20] = [
        Self::Tetrahedron,
        Self::Cube,
        Self::Octahedron,
        Self::Dodecahedron,
        Self::Icosahedron,
        Self::TruncatedCube,
        Self::Cuboctahedron,
        Self::Rhombicuboctahedron,
        Self::SnubTetrahedron,
        Self::SnubCube,
        Self::SnubDodecahedron,
        Self::SmallStellatedDodecahedron,
        Self::Tesseract,
        Self::Cell16,
        Self::Cell24,
        Self::Cell120,
        Self::Cell600,
        Self::Snub24Cell,
        Self::Simplex5,
        Self::Cube5,
    ];

    /// Returns the family the preset is built as.
    pub fn family(self) -> PolytopeFamily {
        match self {
            Self::SnubTetrahedron | Self::SnubCube | Self::SnubDodecahedron => PolytopeFamily::Snub,
            Self::Snub24Cell => PolytopeFamily::Snub24Cell,
            Self::Tesseract | Self::Cell16 | Self::Cell24 | Self::Cell120 | Self::Cell600 => {
                PolytopeFamily::Polychoron
            }
            Self::Simplex5 | Self::Cube5 => PolytopeFamily::Polyteron,
            _ => PolytopeFamily::Polyhedron,
        }
    }

    /// Returns the Coxeter diagram.
    pub fn diagram(self) -> PolytopeResult<CoxeterDiagram> {
        let group = match self {
            Self::Tetrahedron | Self::SnubTetrahedron => FiniteCoxeterGroup::A(3),
            Self::Cube
            | Self::Octahedron
            | Self::TruncatedCube
            | Self::Cuboctahedron
            | Self::Rhombicuboctahedron
            | Self::SnubCube => FiniteCoxeterGroup::B(3),
            Self::Dodecahedron | Self::Icosahedron | Self::SnubDodecahedron => {
                FiniteCoxeterGroup::H3
            }
            Self::SmallStellatedDodecahedron => {
                return Ok(CoxeterDiagram::new([
                    Dihedral::new(5, 2),
                    Dihedral::TWO,
                    Dihedral::new(5, 1),
                ])?);
            }
            Self::Tesseract | Self::Cell16 => FiniteCoxeterGroup::B(4),
            Self::Cell24 => FiniteCoxeterGroup::F4,
            Self::Cell120 | Self::Cell600 => FiniteCoxeterGroup::H4,
            Self::Snub24Cell => return Ok(CoxeterDiagram::new(SNUB_24_CELL_DIAGRAM)?),
            Self::Simplex5 => FiniteCoxeterGroup::A(5),
            Self::Cube5 => FiniteCoxeterGroup::B(5),
        };
        Ok(group.diagram()?)
    }

    /// Returns the distance of the initial vertex from each mirror, in Dynkin
    /// notation.
    pub fn dynkin(self) -> &'static str {
        match self {
            Self::Tetrahedron | Self::Cube | Self::Dodecahedron => "xoo",
            Self::Octahedron | Self::Icosahedron => "oox",
            Self::TruncatedCube => "xxo",
            Self::Cuboctahedron => "oxo",
            Self::Rhombicuboctahedron => "xox",
            Self::SnubTetrahedron | Self::SnubCube | Self::SnubDodecahedron => "xxx",
            Self::SmallStellatedDodecahedron => "xoo",
            Self::Tesseract | Self::Cell24 | Self::Cell120 => "xooo",
            Self::Cell16 | Self::Cell600 => "ooox",
            Self::Snub24Cell => "xxxx",
            Self::Simplex5 | Self::Cube5 => "xoooo",
        }
    }

    /// Returns the relators imposed on top of the Coxeter presentation.
    ///
    /// A diagram entry `5/2` only contributes `(01)^5`, which presents the
    /// same infinite group as `[5, 5]`. The small stellated dodecahedron
    /// closes it with `(0121)^3`.
    pub fn extra_relators(self) -> Vec<Word> {
        match self {
            Self::SmallStellatedDodecahedron => vec![Word::repeat(&[0, 1, 2, 1], 3)],
            _ => vec![],
        }
    }

    /// Returns a builder for the preset.
    pub fn builder(self) -> PolytopeResult<PolytopeBuilder> {
        let family = self.family();
        PolytopeBuilder::with_extra_relators(
            family,
            self.diagram()?.entries().iter().copied(),
            &dynkin_distances(family, self.dynkin())?,
            self.extra_relators(),
        )
    }

    /// Builds the preset.
    pub fn build(self) -> PolytopeResult<Polytope> {
        self.builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preset_diagrams() {
        for preset in Preset::ALL {
            let diagram = preset.diagram().unwrap();
            assert_eq!(diagram.rank(), preset.family().rank(), "{preset}");
            assert_eq!(preset.dynkin().len(), diagram.rank() as usize, "{preset}");
        }
        assert_eq!(Preset::Cell24.diagram().unwrap().to_string(), "(3, 2, 2, 4, 2, 3)");
        assert_eq!(Preset::SmallStellatedDodecahedron.diagram().unwrap().to_string(), "(5/2, 2, 5)");
    }

    #[test]
    fn test_extra_relators() {
        for preset in Preset::ALL {
            let relators = preset.extra_relators();
            if preset == Preset::SmallStellatedDodecahedron {
                assert_eq!(relators, vec![Word::from([0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1])]);
            } else {
                assert!(relators.is_empty(), "{preset}");
            }
        }
    }
}
