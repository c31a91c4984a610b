//! Symmetry group of a polytope: mirrors, reflections, and the presentation
//! used for coset enumeration.

use itertools::Itertools;
use wythoff_group::{CoxeterDiagram, CoxeterGroup, GeneratorId, Presentation, Word};
use wythoff_math::prelude::*;

use crate::PolytopeResult;

/// Everything derived from a Coxeter diagram and a choice of initial point.
#[derive(Debug, Clone)]
pub struct SymmetryGroupModel {
    diagram: CoxeterDiagram,
    group: CoxeterGroup,
    /// Whether the initial point is off each mirror.
    active: Vec<bool>,
    initial_point: Vector,
    /// Presentation of the reflection group, including any extra relators.
    presentation: Presentation,
}
impl SymmetryGroupModel {
    /// Derives mirrors, reflections, and the initial point.
    ///
    /// `distances` gives the distance of the initial point from each mirror,
    /// up to scale. `extra_relators` are imposed on top of the Coxeter
    /// relators.
    pub fn derive(
        diagram: CoxeterDiagram,
        distances: &[Float],
        extra_relators: impl IntoIterator<Item = Word>,
    ) -> PolytopeResult<Self> {
        let group = CoxeterGroup::from_diagram(&diagram)?;
        let initial_point = group.initial_point(distances)?;
        let active = distances.iter().map(|d| d.abs() > EPSILON).collect();
        let presentation = Presentation::coxeter(group.matrix()).with_relators(extra_relators)?;
        Ok(Self {
            diagram,
            group,
            active,
            initial_point,
            presentation,
        })
    }

    /// Returns the Coxeter diagram.
    pub fn diagram(&self) -> &CoxeterDiagram {
        &self.diagram
    }
    /// Returns the mirrors and reflections.
    pub fn group(&self) -> &CoxeterGroup {
        &self.group
    }
    /// Returns the number of mirrors, which is also the dimension of the
    /// space.
    pub fn rank(&self) -> u8 {
        self.group.mirror_count()
    }
    /// Returns the generators, one per mirror.
    pub fn mirrors(&self) -> impl Iterator<Item = GeneratorId> + Clone + use<> {
        (0..self.rank()).map(GeneratorId)
    }
    /// Returns the reflection group presentation.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
    /// Returns the unit-length initial point.
    pub fn initial_point(&self) -> &Vector {
        &self.initial_point
    }

    /// Returns the order of the rotation generated by mirrors `i` and `j`.
    pub fn order(&self, i: GeneratorId, j: GeneratorId) -> usize {
        self.group.matrix().order(i.0, j.0)
    }
    /// Returns the reflection through a mirror.
    pub fn reflection(&self, mirror: GeneratorId) -> &Matrix {
        self.group.reflection(mirror)
    }

    /// Returns whether the initial point is off a mirror.
    pub fn is_active(&self, mirror: GeneratorId) -> bool {
        self.active[mirror.0 as usize]
    }
    /// Returns the mirrors that the initial point is off.
    pub fn active_mirrors(&self) -> Vec<GeneratorId> {
        self.mirrors().filter(|&g| self.is_active(g)).collect()
    }
    /// Returns the mirrors that the initial point lies on. Their reflections
    /// generate the stabilizer of the initial vertex.
    pub fn inactive_mirrors(&self) -> Vec<GeneratorId> {
        self.mirrors().filter(|&g| !self.is_active(g)).collect()
    }

    /// Returns a string like `xoo` describing which mirrors are active.
    pub fn dynkin_string(&self) -> String {
        self.active
            .iter()
            .map(|&a| if a { 'x' } else { 'o' })
            .collect()
    }

    /// Applies a word of reflections to a point, left to right.
    pub fn reflect(&self, point: &Vector, word: &Word) -> Vector {
        word.iter()
            .fold(point.clone(), |p, g| self.reflection(g) * p)
    }

    /// Returns the relators of the presentation as a human-readable list.
    pub fn relators_string(&self) -> String {
        self.presentation.relators().iter().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wythoff_group::GroupError;
    use wythoff_math::assert_approx_eq;

    use super::*;
    use crate::PolytopeError;

    fn cube_model() -> SymmetryGroupModel {
        let diagram = CoxeterDiagram::new([4_u16, 2, 3]).unwrap();
        SymmetryGroupModel::derive(diagram, &[1.0, 0.0, 0.0], []).unwrap()
    }

    #[test]
    fn test_active_mirrors() {
        let m = cube_model();
        assert_eq!(m.active_mirrors(), vec![GeneratorId(0)]);
        assert_eq!(m.inactive_mirrors(), vec![GeneratorId(1), GeneratorId(2)]);
        assert_eq!(m.dynkin_string(), "xoo");
        assert_eq!(m.relators_string(), "01010101, 0202, 121212");
    }

    #[test]
    fn test_stabilizer_fixes_initial_point() {
        let m = cube_model();
        let p = m.initial_point();
        for g in m.inactive_mirrors() {
            assert_approx_eq!(m.reflection(g) * p, p.clone());
        }
        let moved = m.reflect(p, &Word::from([0]));
        assert!(!moved.abs_diff_eq(p, EPSILON));
        assert_approx_eq!(m.reflect(p, &Word::from([0, 0])), p.clone());
    }

    #[test]
    fn test_bad_distances() {
        let diagram = CoxeterDiagram::new([4_u16, 2, 3]).unwrap();
        assert_eq!(
            SymmetryGroupModel::derive(diagram, &[0.0; 3], []).unwrap_err(),
            PolytopeError::Group(GroupError::DegeneratePoint),
        );
    }
}
