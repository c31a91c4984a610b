//! Orbits of a rotation subgroup, used for snub polytopes.
//!
//! Each rotation generator is a product of two mirrors. Generator `2k` is the
//! rotation `ρa ρb` for the `k`th mirror pair `(a, b)`, and generator `2k+1` is
//! its inverse `ρb ρa`.

use wythoff_group::{CosetTable, GeneratorId, Presentation, Word, enumerate_cosets};
use wythoff_math::prelude::*;

use crate::orbit::{EdgeSet, FaceSet, images};
use crate::{
    BuildConfig, Edge, ElementGroup, Face, OrbitType, PolytopeResult, SymmetryGroupModel,
    VertexOrbit,
};

/// Rotation generator with a known order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotationOrbit {
    /// Word in the rotation generators.
    pub word: Word,
    /// Order of the rotation.
    pub order: usize,
}

/// Presentation of a rotation subgroup together with the base edges and faces
/// of its snub polytope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSystem {
    /// Pair of mirrors for each rotation generator.
    pub mirror_pairs: Vec<(GeneratorId, GeneratorId)>,
    /// Relators, written with generator `2k+1` as the inverse of `2k`.
    pub relators: Vec<Word>,
    /// Rotations that produce an edge from each vertex to its image. Single
    /// generators also produce a polygon by repeated application.
    pub rotations: Vec<RotationOrbit>,
    /// Base polygons, each given by the words leading to its vertices from the
    /// initial vertex.
    pub polygons: Vec<Vec<Word>>,
}
impl RotationSystem {
    /// Rotation subgroup of a rank-3 reflection group, generated by
    /// `r = ρ0 ρ1` and `s = ρ1 ρ2`.
    ///
    /// The presentation is `<r, s | r^p = s^q = (rs)^m = 1>` where `p`, `q`,
    /// and `m` are the orders of mirror pairs `(0, 1)`, `(1, 2)`, and `(0, 2)`.
    pub fn snub_polyhedron(model: &SymmetryGroupModel) -> Self {
        let order = |i: u8, j: u8| model.order(GeneratorId(i), GeneratorId(j));
        let rotations = vec![
            RotationOrbit {
                word: Word::from([0]),
                order: order(0, 1),
            },
            RotationOrbit {
                word: Word::from([2]),
                order: order(1, 2),
            },
            RotationOrbit {
                word: Word::from([0, 2]),
                order: order(0, 2),
            },
        ];
        Self {
            mirror_pairs: vec![
                (GeneratorId(0), GeneratorId(1)),
                (GeneratorId(1), GeneratorId(2)),
            ],
            relators: power_relators(&rotations)
                .chain([Word::from([0, 1]), Word::from([2, 3])])
                .collect(),
            rotations,
            polygons: vec![vec![Word::IDENTITY, Word::from([2]), Word::from([0, 2])]],
        }
    }

    /// Rotation subgroup of a rank-4 reflection group with mirror 1 at the
    /// branch point, generated by `r = ρ0 ρ1`, `s = ρ1 ρ2`, and `t = ρ1 ρ3`.
    ///
    /// For `[3^{1,1,1}]` this is the symmetry of the snub 24-cell, with
    /// presentation `<r, s, t | r^3 = s^3 = t^3 = (rs)^2 = (rt)^2 = (s⁻¹t)^2 = 1>`.
    pub fn snub_demitesseract(model: &SymmetryGroupModel) -> Self {
        let order = |i: u8, j: u8| model.order(GeneratorId(i), GeneratorId(j));
        let rotation = |word: Word, order: usize| RotationOrbit { word, order };
        let rotations = vec![
            rotation(Word::from([0]), order(0, 1)),
            rotation(Word::from([2]), order(1, 2)),
            rotation(Word::from([4]), order(1, 3)),
            // r s = ρ0 ρ2
            rotation(Word::from([0, 2]), order(0, 2)),
            // r t = ρ0 ρ3
            rotation(Word::from([0, 4]), order(0, 3)),
            // s⁻¹ t = ρ2 ρ3
            rotation(Word::from([3, 4]), order(2, 3)),
        ];
        Self {
            mirror_pairs: vec![
                (GeneratorId(0), GeneratorId(1)),
                (GeneratorId(1), GeneratorId(2)),
                (GeneratorId(1), GeneratorId(3)),
            ],
            relators: power_relators(&rotations)
                .chain([Word::from([0, 1]), Word::from([2, 3]), Word::from([4, 5])])
                .collect(),
            rotations,
            polygons: vec![
                vec![Word::IDENTITY, Word::from([2]), Word::from([0, 2])],
                vec![Word::IDENTITY, Word::from([4]), Word::from([0, 4])],
                vec![Word::IDENTITY, Word::from([2]), Word::from([5, 2])],
                vec![Word::IDENTITY, Word::from([0, 2]), Word::from([5, 2])],
            ],
        }
    }

    /// Returns the number of rotation generators, counting inverses.
    pub fn generator_count(&self) -> u8 {
        self.mirror_pairs.len() as u8 * 2
    }

    /// Returns the presentation of the rotation subgroup.
    pub fn presentation(&self) -> PolytopeResult<Presentation> {
        Ok(Presentation::free(self.generator_count(), self.relators.clone())?)
    }

    /// Applies a word of rotations to a point, left to right.
    pub fn rotate(&self, model: &SymmetryGroupModel, point: &Vector, word: &Word) -> Vector {
        word.iter().fold(point.clone(), |p, g| {
            let (a, b) = self.mirror_pairs[g.0 as usize / 2];
            let (first, second) = if g.0 % 2 == 0 { (a, b) } else { (b, a) };
            model.reflection(second) * (model.reflection(first) * p)
        })
    }
}

/// Returns `w^n` for each rotation `w` of order `n`.
fn power_relators(rotations: &[RotationOrbit]) -> impl Iterator<Item = Word> + '_ {
    rotations.iter().map(|r| {
        let generators: Vec<u8> = r.word.iter().map(|g| g.0).collect();
        Word::repeat(&generators, r.order)
    })
}

/// Enumerates the whole rotation group. Every element gives a distinct vertex.
pub(crate) fn vertex_table(
    rotations: &RotationSystem,
    config: &BuildConfig,
) -> PolytopeResult<CosetTable> {
    Ok(enumerate_cosets(&rotations.presentation()?, &[], &config.limits)?)
}

/// Returns one group of edges per rotation, joining each vertex to its image.
pub(crate) fn edges(rotations: &RotationSystem, vertices: &VertexOrbit) -> Vec<ElementGroup<Edge>> {
    rotations
        .rotations
        .iter()
        .map(|rot| {
            let base = [VertexOrbit::INITIAL, vertices.image_of_initial(&rot.word)];
            let mut edges = EdgeSet::default();
            for e in images(&base, vertices.words(), vertices) {
                edges.insert([e[0], e[1]]);
            }
            let elements = edges.into_vec();
            log::debug!("{} edges for rotation {}", elements.len(), rot.word);
            ElementGroup {
                kind: OrbitType::Rotation(rot.word.clone()),
                elements,
            }
        })
        .collect()
}

/// Returns one group of polygons per single-generator rotation, traced by
/// repeatedly applying it, followed by one group per base polygon.
pub(crate) fn faces(rotations: &RotationSystem, vertices: &VertexOrbit) -> Vec<ElementGroup<Face>> {
    let cycles = rotations
        .rotations
        .iter()
        .filter(|rot| rot.word.len() == 1 && rot.order > 2)
        .map(|rot| {
            let generators: Vec<u8> = rot.word.iter().map(|g| g.0).collect();
            let base: Face = (0..rot.order)
                .map(|k| vertices.image_of_initial(&Word::repeat(&generators, k)))
                .collect();
            (OrbitType::Rotation(rot.word.clone()), base)
        });
    let polygons = rotations.polygons.iter().map(|words| {
        let base: Face = words.iter().map(|w| vertices.image_of_initial(w)).collect();
        (OrbitType::SnubPolygon(words.clone()), base)
    });

    cycles
        .chain(polygons)
        .map(|(kind, base)| {
            let mut faces = FaceSet::default();
            for f in images(&base, vertices.words(), vertices) {
                faces.insert(f);
            }
            let elements = faces.into_vec();
            log::debug!("{} faces for {kind}", elements.len());
            ElementGroup { kind, elements }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wythoff_group::CoxeterDiagram;
    use wythoff_math::assert_approx_eq;

    use super::*;
    use crate::{GroupAction, OrbitRule};

    fn snub_cube_model() -> SymmetryGroupModel {
        let diagram = CoxeterDiagram::new([4_u16, 2, 3]).unwrap();
        SymmetryGroupModel::derive(diagram, &[1.0, 1.0, 1.0], []).unwrap()
    }

    #[test]
    fn test_snub_polyhedron_relators() {
        let rot = RotationSystem::snub_polyhedron(&snub_cube_model());
        assert_eq!(
            rot.relators,
            vec![
                Word::from([0, 0, 0, 0]),
                Word::from([2, 2, 2]),
                Word::from([0, 2, 0, 2]),
                Word::from([0, 1]),
                Word::from([2, 3]),
            ],
        );
    }

    #[test]
    fn test_inverse_rotation() {
        let model = snub_cube_model();
        let rot = RotationSystem::snub_polyhedron(&model);
        let p = model.initial_point();
        for w in [Word::from([0, 1]), Word::from([3, 2]), Word::from([2, 2, 2])] {
            assert_approx_eq!(rot.rotate(&model, p, &w), p.clone());
        }
        assert_approx_eq!(
            rot.rotate(&model, p, &Word::from([0])),
            model.reflect(p, &Word::from([0, 1])),
        );
    }

    #[test]
    fn test_vertices_are_whole_group() {
        let model = snub_cube_model();
        let action = GroupAction::Rotation(RotationSystem::snub_polyhedron(&model));
        let vertices = action.build_vertices(&model, &BuildConfig::default()).unwrap();
        assert_eq!(vertices.len(), 24);

        // Coordinates agree with the coset table.
        for v in vertices.iter() {
            let image = vertices.move_vertex(v, &Word::from([2]));
            let moved = action.transform(&model, &vertices.coords()[v], &Word::from([2]));
            assert_approx_eq!(moved, vertices.coords()[image].clone());
        }
    }
}
