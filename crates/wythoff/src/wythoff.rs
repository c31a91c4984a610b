//! Orbits of the full reflection group.

use itertools::Itertools;
use rayon::prelude::*;
use wythoff_group::{CosetTable, GeneratorId, Word, enumerate_cosets};

use crate::orbit::{EdgeSet, FaceSet, images};
use crate::{
    BuildConfig, Edge, ElementGroup, Face, OrbitType, PolytopeResult, SymmetryGroupModel,
    VertexOrbit,
};

/// Enumerates the cosets of the stabilizer of the initial vertex, which is
/// generated by the mirrors the vertex lies on.
pub(crate) fn vertex_table(
    model: &SymmetryGroupModel,
    config: &BuildConfig,
) -> PolytopeResult<CosetTable> {
    let stabilizer = model
        .inactive_mirrors()
        .into_iter()
        .map(|g| Word::new([g]))
        .collect_vec();
    Ok(enumerate_cosets(model.presentation(), &stabilizer, &config.limits)?)
}

/// Enumerates one group of edges per active mirror.
///
/// The base edge for mirror `i` joins the initial vertex to its reflection
/// through `i`. Its images are indexed by the cosets of `<i>`.
pub(crate) fn edges(
    model: &SymmetryGroupModel,
    vertices: &VertexOrbit,
    config: &BuildConfig,
) -> PolytopeResult<Vec<ElementGroup<Edge>>> {
    model
        .active_mirrors()
        .into_par_iter()
        .map(|i| -> PolytopeResult<ElementGroup<Edge>> {
            let table = enumerate_cosets(model.presentation(), &[Word::new([i])], &config.limits)?;
            let mut edges = EdgeSet::default();
            for w in table.canonical_words().iter_values() {
                let a = vertices.image_of_initial(w);
                let b = vertices.image_of_initial(&Word::new([i]).then(w));
                edges.insert([a, b]);
            }
            let elements = edges.into_vec();
            log::debug!("{} edges for mirror {}", elements.len(), i.0);
            Ok(ElementGroup {
                kind: OrbitType::Mirror(i),
                elements,
            })
        })
        .collect()
}

/// Returns the base face fixed by the rotation `ρi ρj`, or `None` if that
/// rotation does not produce a face.
///
/// If both mirrors are active, the face alternates between edges of type `i`
/// and `j` and has `2m` vertices. If only one is active, it has `m` vertices
/// and needs `m > 2`.
pub(crate) fn base_face(
    model: &SymmetryGroupModel,
    vertices: &VertexOrbit,
    i: GeneratorId,
    j: GeneratorId,
) -> Option<Face> {
    let m = model.order(i, j);
    let rotation = |k: usize| Word::repeat(&[i.0, j.0], k);
    match (model.is_active(i), model.is_active(j)) {
        (true, true) => Some(
            (0..m)
                .flat_map(|k| {
                    [
                        vertices.image_of_initial(&rotation(k)),
                        vertices.image_of_initial(&Word::new([j]).then(&rotation(k))),
                    ]
                })
                .collect(),
        ),
        (true, false) | (false, true) if m > 2 => Some(
            (0..m)
                .map(|k| vertices.image_of_initial(&rotation(k)))
                .collect(),
        ),
        _ => None,
    }
}

/// Enumerates one group of faces per pair of mirrors that produces a face.
///
/// The base face for `(i, j)` is fixed by `<i, j>`, so its images are indexed
/// by the cosets of that subgroup.
pub(crate) fn faces(
    model: &SymmetryGroupModel,
    vertices: &VertexOrbit,
    config: &BuildConfig,
) -> PolytopeResult<Vec<ElementGroup<Face>>> {
    let pairs = model
        .mirrors()
        .tuple_combinations()
        .filter_map(|(i, j)| Some((i, j, base_face(model, vertices, i, j)?)))
        .collect_vec();

    pairs
        .into_par_iter()
        .map(|(i, j, f0)| -> PolytopeResult<ElementGroup<Face>> {
            let subgroup = [Word::new([i]), Word::new([j])];
            let table = enumerate_cosets(model.presentation(), &subgroup, &config.limits)?;
            let mut faces = FaceSet::default();
            for f in images(&f0, table.canonical_words().iter_values(), vertices) {
                faces.insert(f);
            }
            let elements = faces.into_vec();
            log::debug!(
                "{} faces with {} sides for mirrors ({}, {})",
                elements.len(),
                f0.len(),
                i.0,
                j.0,
            );
            Ok(ElementGroup {
                kind: OrbitType::MirrorPair(i, j),
                elements,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wythoff_group::CoxeterDiagram;

    use super::*;
    use crate::{GroupAction, OrbitRule, VertexId};

    fn vertices_of(diagram: [u16; 3], distances: [f64; 3]) -> (SymmetryGroupModel, VertexOrbit) {
        let diagram = CoxeterDiagram::new(diagram).unwrap();
        let model = SymmetryGroupModel::derive(diagram, &distances, []).unwrap();
        let vertices = GroupAction::Reflection
            .build_vertices(&model, &BuildConfig::default())
            .unwrap();
        (model, vertices)
    }

    #[test]
    fn test_truncated_cube_base_faces() {
        let (model, vertices) = vertices_of([4, 2, 3], [1.0, 1.0, 0.0]);
        let octagon = base_face(&model, &vertices, GeneratorId(0), GeneratorId(1)).unwrap();
        assert_eq!(octagon.len(), 8);
        assert_eq!(octagon.iter().unique().count(), 8);
        assert_eq!(octagon[0], VertexId(0));

        // Mirrors 0 and 2 commute and only 0 is active.
        assert_eq!(base_face(&model, &vertices, GeneratorId(0), GeneratorId(2)), None);
        let triangle = base_face(&model, &vertices, GeneratorId(1), GeneratorId(2)).unwrap();
        assert_eq!(triangle.len(), 3);
    }

    #[test]
    fn test_inactive_pair_has_no_face() {
        let (model, vertices) = vertices_of([4, 2, 3], [1.0, 0.0, 0.0]);
        assert_eq!(base_face(&model, &vertices, GeneratorId(1), GeneratorId(2)), None);
        let square = base_face(&model, &vertices, GeneratorId(0), GeneratorId(1)).unwrap();
        assert_eq!(square.len(), 4);
    }
}
