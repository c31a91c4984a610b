//! Combinatorial duals of polyhedra.
//!
//! Each face of the primal becomes a vertex, found by polar reciprocation
//! about the unit sphere. Each edge of the primal becomes the edge between
//! the two faces that meet at it, and each vertex of the primal becomes the
//! face whose vertices are the faces around it.

use std::collections::HashMap;

use wythoff_math::prelude::*;
use wythoff_util::ti::TypedIndex;

use crate::{
    Edge, ElementGroup, Face, FaceId, OrbitType, PerVertex, Polyhedral, PolytopeError,
    PolytopeResult, VertexId,
};

/// Dual of a polyhedron. Its vertex `i` comes from face `i` of the primal and
/// its face `i` comes from vertex `i` of the primal.
#[derive(Debug, Clone)]
pub struct DualPolyhedron {
    coords: PerVertex<Vector>,
    edges: Vec<ElementGroup<Edge>>,
    faces: Vec<ElementGroup<Face>>,
}
impl Polyhedral for DualPolyhedron {
    fn ndim(&self) -> u8 {
        3
    }
    fn vertex_coords(&self) -> &PerVertex<Vector> {
        &self.coords
    }
    fn edge_groups(&self) -> &[ElementGroup<Edge>] {
        &self.edges
    }
    fn face_groups(&self) -> &[ElementGroup<Face>] {
        &self.faces
    }
}
impl DualPolyhedron {
    /// Constructs the dual of a closed polyhedron.
    ///
    /// Every face must be planar and must not pass through the origin, every
    /// edge must lie on exactly two faces, and the faces around each vertex
    /// must form a single cycle.
    pub fn new(primal: &impl Polyhedral) -> PolytopeResult<Self> {
        if primal.ndim() != 3 {
            return Err(PolytopeError::NotAPolyhedron {
                ndim: primal.ndim(),
            });
        }

        let faces: Vec<&Face> = primal.faces().collect();
        let incidence = EdgeIncidence::new(&faces)?;

        let coords = faces
            .iter()
            .enumerate()
            .map(|(i, f)| -> PolytopeResult<Vector> {
                let id = FaceId::try_from_index(i)?;
                polar_vertex(&primal.coords_of(f)).ok_or(PolytopeError::DegenerateFace(id))
            })
            .collect::<PolytopeResult<_>>()?;

        let edges = primal
            .edge_groups()
            .iter()
            .map(|group| -> PolytopeResult<ElementGroup<Edge>> {
                let elements = group
                    .elements
                    .iter()
                    .map(|&[a, b]| match incidence.faces_at(a, b) {
                        [f, g] => Ok([VertexId(f.0), VertexId(g.0)]),
                        others => Err(PolytopeError::NonManifoldEdge(a, b, others.len())),
                    })
                    .collect::<PolytopeResult<_>>()?;
                Ok(ElementGroup {
                    kind: group.kind.clone(),
                    elements,
                })
            })
            .collect::<PolytopeResult<_>>()?;

        let mut around_vertex: HashMap<VertexId, Vec<FaceId>> = HashMap::new();
        for (i, f) in faces.iter().enumerate() {
            for &v in f.iter() {
                around_vertex
                    .entry(v)
                    .or_default()
                    .push(FaceId::try_from_index(i)?);
            }
        }
        let vertex_figures = primal
            .vertex_coords()
            .iter_keys()
            .map(|v| {
                let around = around_vertex.get(&v).map(Vec::as_slice).unwrap_or_default();
                vertex_link(v, around, &faces, &incidence)
            })
            .collect::<PolytopeResult<_>>()?;

        let ret = Self {
            coords,
            edges,
            faces: vec![ElementGroup {
                kind: OrbitType::VertexFigure,
                elements: vertex_figures,
            }],
        };
        log::info!(
            "built dual: V={} E={} F={}",
            ret.num_vertices(),
            ret.num_edges(),
            ret.num_faces(),
        );
        Ok(ret)
    }
}

/// Returns the pole of the plane of a face with respect to the unit sphere,
/// or `None` if the face has no normal or its plane passes through the
/// origin.
fn polar_vertex(verts: &[Vector]) -> Option<Vector> {
    let normal = face_normal(verts)?;
    let mean = verts.iter().map(|p| normal.dot(p)).sum::<Float>() / verts.len() as Float;
    if mean.abs() < EPSILON {
        return None;
    }
    Some(normal / mean)
}

/// Faces incident to each edge, keyed without orientation.
struct EdgeIncidence(HashMap<Edge, Vec<FaceId>>);
impl EdgeIncidence {
    fn new(faces: &[&Face]) -> PolytopeResult<Self> {
        let mut map: HashMap<Edge, Vec<FaceId>> = HashMap::new();
        for (i, f) in faces.iter().enumerate() {
            let id = FaceId::try_from_index(i)?;
            for [a, b] in crate::orbit::face_edges(f) {
                map.entry(edge_key(a, b)).or_default().push(id);
            }
        }
        Ok(Self(map))
    }

    fn faces_at(&self, a: VertexId, b: VertexId) -> &[FaceId] {
        self.0.get(&edge_key(a, b)).map(Vec::as_slice).unwrap_or_default()
    }
}

fn edge_key(a: VertexId, b: VertexId) -> Edge {
    if a <= b { [a, b] } else { [b, a] }
}

/// Walks the faces around `v`, crossing one edge at a time, and returns them
/// in cyclic order.
fn vertex_link(
    v: VertexId,
    around: &[FaceId],
    faces: &[&Face],
    incidence: &EdgeIncidence,
) -> PolytopeResult<Face> {
    let err = PolytopeError::NonManifoldVertexLink(v);
    let &[first, ..] = around else {
        return Err(err);
    };
    if around.len() < 3 {
        return Err(err);
    }

    let mut link = Face::new();
    let mut current = first;
    // Other endpoint of the edge through which the walk entered `current`.
    let mut entered_via = None;
    loop {
        link.push(VertexId(current.0));
        if link.len() > around.len() {
            return Err(err);
        }

        // Faces are not consistently oriented, so leave along whichever edge
        // at `v` was not used to enter.
        let face = faces[current.to_index()];
        let n = face.len();
        let i = face.iter().position(|&u| u == v).ok_or(err.clone())?;
        let (pred, succ) = (face[(i + n - 1) % n], face[(i + 1) % n]);
        let exit = if entered_via == Some(succ) { pred } else { succ };
        let next = match incidence.faces_at(v, exit) {
            &[f, g] if f == current => g,
            &[f, g] if g == current => f,
            _ => return Err(err),
        };
        debug_assert!(crate::share_edge(face, faces[next.to_index()]));
        if next == first {
            break;
        }
        entered_via = Some(exit);
        current = next;
    }

    if link.len() != around.len() {
        return Err(err);
    }
    Ok(link)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;

    /// Hand-built polyhedron, for inputs the Wythoff construction never
    /// produces.
    struct Mesh {
        coords: PerVertex<Vector>,
        edges: Vec<ElementGroup<Edge>>,
        faces: Vec<ElementGroup<Face>>,
    }
    impl Polyhedral for Mesh {
        fn ndim(&self) -> u8 {
            3
        }
        fn vertex_coords(&self) -> &PerVertex<Vector> {
            &self.coords
        }
        fn edge_groups(&self) -> &[ElementGroup<Edge>] {
            &self.edges
        }
        fn face_groups(&self) -> &[ElementGroup<Face>] {
            &self.faces
        }
    }

    fn mesh(coords: Vec<Vector>, edges: &[[u32; 2]], faces: &[&[u32]]) -> Mesh {
        Mesh {
            coords: coords.into(),
            edges: vec![ElementGroup {
                kind: OrbitType::VertexFigure,
                elements: edges.iter().map(|&[a, b]| [VertexId(a), VertexId(b)]).collect(),
            }],
            faces: vec![ElementGroup {
                kind: OrbitType::VertexFigure,
                elements: faces
                    .iter()
                    .map(|f| f.iter().map(|&i| VertexId(i)).collect())
                    .collect(),
            }],
        }
    }

    fn tetrahedron_coords() -> Vec<Vector> {
        vec![
            vector![1.0, 1.0, 1.0],
            vector![1.0, -1.0, -1.0],
            vector![-1.0, 1.0, -1.0],
            vector![-1.0, -1.0, 1.0],
        ]
    }

    #[test]
    fn test_tetrahedron_dual() {
        let t = mesh(
            tetrahedron_coords(),
            &[[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]],
            &[&[0, 1, 2], &[0, 3, 1], &[0, 2, 3], &[1, 3, 2]],
        );
        let d = DualPolyhedron::new(&t).unwrap();
        assert_eq!(d.num_vertices(), 4);
        assert_eq!(d.num_edges(), 6);
        assert_eq!(d.num_faces(), 4);
        // Face 0 is opposite vertex 3, so its pole points away from it.
        assert!(d.vertex_coords()[VertexId(0)].dot(&t.coords[VertexId(3)]) < 0.0);
        for f in d.faces() {
            assert_eq!(f.len(), 3);
        }
    }

    #[test]
    fn test_open_surface() {
        // A single triangle: every edge lies on only one face.
        let t = mesh(
            tetrahedron_coords()[..3].to_vec(),
            &[[0, 1], [1, 2], [2, 0]],
            &[&[0, 1, 2]],
        );
        assert_eq!(
            DualPolyhedron::new(&t).unwrap_err(),
            PolytopeError::NonManifoldEdge(VertexId(0), VertexId(1), 1),
        );
    }

    #[test]
    fn test_face_through_origin() {
        let square = mesh(
            vec![
                vector![1.0, 0.0, 1.0],
                vector![-1.0, 0.0, 1.0],
                vector![-1.0, 0.0, -1.0],
                vector![1.0, 0.0, -1.0],
            ],
            &[[0, 1], [1, 2], [2, 3], [3, 0]],
            &[&[0, 1, 2, 3]],
        );
        assert_eq!(
            DualPolyhedron::new(&square).unwrap_err(),
            PolytopeError::DegenerateFace(FaceId(0)),
        );
    }

    #[test]
    fn test_pinched_vertex() {
        // Two tetrahedra glued at vertex 0.
        let mut coords = tetrahedron_coords();
        coords.extend([
            vector![1.0, 3.0, 3.0],
            vector![3.0, 1.0, 3.0],
            vector![3.0, 3.0, 1.0],
        ]);
        let faces: Vec<&[u32]> = vec![
            &[0, 1, 2],
            &[0, 3, 1],
            &[0, 2, 3],
            &[1, 3, 2],
            &[0, 4, 5],
            &[0, 6, 4],
            &[0, 5, 6],
            &[4, 6, 5],
        ];
        let edges = [
            [0, 1],
            [0, 2],
            [0, 3],
            [1, 2],
            [1, 3],
            [2, 3],
            [0, 4],
            [0, 5],
            [0, 6],
            [4, 5],
            [4, 6],
            [5, 6],
        ];
        let m = mesh(coords, &edges, &faces);
        assert_eq!(
            DualPolyhedron::new(&m).unwrap_err(),
            PolytopeError::NonManifoldVertexLink(VertexId(0)),
        );
    }

    #[test]
    fn test_vertex_link_order() {
        let faces: Vec<Face> = vec![
            smallvec![VertexId(0), VertexId(1), VertexId(2)],
            smallvec![VertexId(0), VertexId(3), VertexId(1)],
            smallvec![VertexId(0), VertexId(2), VertexId(3)],
            smallvec![VertexId(1), VertexId(3), VertexId(2)],
        ];
        let refs: Vec<&Face> = faces.iter().collect();
        let incidence = EdgeIncidence::new(&refs).unwrap();
        let around = [FaceId(0), FaceId(1), FaceId(2)];
        let link = vertex_link(VertexId(0), &around, &refs, &incidence).unwrap();
        // Face 0 leaves along (0, 1), which it shares with face 1.
        assert_eq!(link.as_slice(), &[VertexId(0), VertexId(1), VertexId(2)]);
    }
}
