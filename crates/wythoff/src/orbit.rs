//! Orbits of vertices, edges, and faces under a group action.

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;
use wythoff_group::{CosetId, CosetTable, GeneratorId, Word};
use wythoff_math::Vector;
use wythoff_util::ti::TiVec;

use crate::{BuildConfig, PolytopeResult, RotationSystem, SymmetryGroupModel, snub, wythoff};

wythoff_util::typed_index_struct! {
    /// ID of a vertex in a polytope.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct VertexId(pub u32);
    /// ID of a face in a polytope, counting across all face groups.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FaceId(pub u32);
}
impl From<CosetId> for VertexId {
    fn from(value: CosetId) -> Self {
        VertexId(value.0)
    }
}
impl From<VertexId> for CosetId {
    fn from(value: VertexId) -> Self {
        CosetId(value.0)
    }
}

/// List containing a value per vertex.
pub type PerVertex<T> = TiVec<VertexId, T>;

/// Edge between two vertices. Orientation is not significant.
pub type Edge = [VertexId; 2];
/// Face given as a cyclic sequence of vertices. Rotating or reversing the
/// sequence gives the same face.
pub type Face = SmallVec<[VertexId; 8]>;

/// What generated a group of edges or faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrbitType {
    /// Edges joining each vertex to its reflection through a mirror.
    Mirror(GeneratorId),
    /// Polygons fixed by the rotation generated by two mirrors.
    MirrorPair(GeneratorId, GeneratorId),
    /// Edges from each vertex to its image under a rotation, or polygons
    /// traced by repeatedly applying that rotation.
    Rotation(Word),
    /// Polygons whose vertices are the images of the initial vertex under a
    /// fixed list of rotation words.
    SnubPolygon(Vec<Word>),
    /// Faces of a dual polyhedron, one around each vertex of the primal.
    VertexFigure,
}
impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mirror(g) => write!(f, "mirror {}", g.0),
            Self::MirrorPair(i, j) => write!(f, "mirrors ({}, {})", i.0, j.0),
            Self::Rotation(w) => write!(f, "rotation {w}"),
            Self::SnubPolygon(words) => write!(f, "snub polygon [{}]", words.iter().join(", ")),
            Self::VertexFigure => write!(f, "vertex figure"),
        }
    }
}

/// Elements of a polytope generated by the same base element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementGroup<T> {
    /// What generated the elements.
    pub kind: OrbitType,
    /// Elements in the order they were discovered.
    pub elements: Vec<T>,
}
impl<T> ElementGroup<T> {
    /// Returns the number of elements in the group.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Returns whether the group has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Vertices of a polytope, as cosets of the stabilizer of the initial vertex.
#[derive(Debug, Clone)]
pub struct VertexOrbit {
    table: CosetTable,
    coords: PerVertex<Vector>,
}
impl VertexOrbit {
    /// The initial vertex, whose canonical word is empty.
    pub const INITIAL: VertexId = VertexId(0);

    pub(crate) fn new(table: CosetTable, coords: PerVertex<Vector>) -> Self {
        Self { table, coords }
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    /// Returns whether there are no vertices, which never happens.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// Returns the coset table of the vertices.
    pub fn table(&self) -> &CosetTable {
        &self.table
    }
    /// Returns the coordinates of each vertex.
    pub fn coords(&self) -> &PerVertex<Vector> {
        &self.coords
    }
    /// Returns the canonical word leading to each vertex from the initial one.
    pub fn words(&self) -> &[Word] {
        self.table.canonical_words()
    }
    /// Returns every vertex.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + use<> {
        self.table.cosets().map(VertexId::from)
    }

    /// Returns the vertex reached by applying `word` to `vertex`, using only
    /// the coset table.
    #[track_caller]
    pub fn move_vertex(&self, vertex: VertexId, word: &Word) -> VertexId {
        self.table.walk(vertex.into(), word).into()
    }
    /// Returns the image of the initial vertex under `word`.
    #[track_caller]
    pub fn image_of_initial(&self, word: &Word) -> VertexId {
        self.move_vertex(Self::INITIAL, word)
    }
}

/// Capability shared by every shape of group action: how to enumerate vertex,
/// edge, and face orbits, and how a word acts on a point.
pub trait OrbitRule {
    /// Enumerates vertices by coset enumeration.
    fn build_vertices(
        &self,
        model: &SymmetryGroupModel,
        config: &BuildConfig,
    ) -> PolytopeResult<VertexOrbit>;
    /// Enumerates edges, grouped by orbit.
    fn build_edges(
        &self,
        model: &SymmetryGroupModel,
        vertices: &VertexOrbit,
        config: &BuildConfig,
    ) -> PolytopeResult<Vec<ElementGroup<Edge>>>;
    /// Enumerates faces, grouped by orbit.
    fn build_faces(
        &self,
        model: &SymmetryGroupModel,
        vertices: &VertexOrbit,
        config: &BuildConfig,
    ) -> PolytopeResult<Vec<ElementGroup<Face>>>;
    /// Applies a word to a point.
    fn transform(&self, model: &SymmetryGroupModel, point: &Vector, word: &Word) -> Vector;
}

/// Shape of the group acting on the vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupAction {
    /// Full reflection group; each generator is a mirror.
    Reflection,
    /// Rotation subgroup; each generator is a product of two mirrors.
    Rotation(RotationSystem),
}
impl OrbitRule for GroupAction {
    fn build_vertices(
        &self,
        model: &SymmetryGroupModel,
        config: &BuildConfig,
    ) -> PolytopeResult<VertexOrbit> {
        let table = match self {
            Self::Reflection => wythoff::vertex_table(model, config)?,
            Self::Rotation(rot) => snub::vertex_table(rot, config)?,
        };
        let init = model.initial_point();
        let coords = table
            .canonical_words()
            .iter_values()
            .map(|w| self.transform(model, init, w))
            .collect();
        Ok(VertexOrbit::new(table, coords))
    }

    fn build_edges(
        &self,
        model: &SymmetryGroupModel,
        vertices: &VertexOrbit,
        config: &BuildConfig,
    ) -> PolytopeResult<Vec<ElementGroup<Edge>>> {
        match self {
            Self::Reflection => wythoff::edges(model, vertices, config),
            Self::Rotation(rot) => Ok(snub::edges(rot, vertices)),
        }
    }

    fn build_faces(
        &self,
        model: &SymmetryGroupModel,
        vertices: &VertexOrbit,
        config: &BuildConfig,
    ) -> PolytopeResult<Vec<ElementGroup<Face>>> {
        match self {
            Self::Reflection => wythoff::faces(model, vertices, config),
            Self::Rotation(rot) => Ok(snub::faces(rot, vertices)),
        }
    }

    fn transform(&self, model: &SymmetryGroupModel, point: &Vector, word: &Word) -> Vector {
        match self {
            Self::Reflection => model.reflect(point, word),
            Self::Rotation(rot) => rot.rotate(model, point, word),
        }
    }
}

/// Returns the image of `base` under each word.
pub(crate) fn images<'a, I>(
    base: &'a [VertexId],
    words: I,
    vertices: &'a VertexOrbit,
) -> impl Iterator<Item = Face> + 'a
where
    I: IntoIterator<Item = &'a Word>,
    I::IntoIter: 'a,
{
    words
        .into_iter()
        .map(move |w| base.iter().map(|&v| vertices.move_vertex(v, w)).collect())
}

/// Set of edges that ignores orientation.
#[derive(Debug, Default, Clone)]
pub(crate) struct EdgeSet {
    seen: HashSet<Edge>,
    edges: Vec<Edge>,
}
impl EdgeSet {
    /// Adds an edge unless it or its reverse is already present. Returns
    /// whether it was added.
    pub fn insert(&mut self, [a, b]: Edge) -> bool {
        let key = if a <= b { [a, b] } else { [b, a] };
        let is_new = self.seen.insert(key);
        if is_new {
            self.edges.push([a, b]);
        }
        is_new
    }
    pub fn into_vec(self) -> Vec<Edge> {
        self.edges
    }
}

/// Set of faces that ignores rotation and reversal.
#[derive(Debug, Default, Clone)]
pub(crate) struct FaceSet {
    seen: HashSet<Face>,
    faces: Vec<Face>,
}
impl FaceSet {
    /// Adds a face unless it is a duplicate of one already present. Returns
    /// whether it was added.
    pub fn insert(&mut self, face: Face) -> bool {
        if is_duplicate_face(&face, &self.seen) {
            return false;
        }
        self.seen.insert(canonical_face(&face));
        self.faces.push(face);
        true
    }
    pub fn into_vec(self) -> Vec<Face> {
        self.faces
    }
}

/// Returns the lexicographically smallest rotation of `face` or of its
/// reverse. Two faces are the same iff their canonical forms are equal.
pub fn canonical_face(face: &[VertexId]) -> Face {
    let n = face.len();
    let forwards = (0..n).map(|start| (0..n).map(move |i| face[(start + i) % n]));
    let backwards = (0..n).map(|start| (0..n).map(move |i| face[(start + n - i) % n]));
    let mut best: Option<Face> = None;
    for candidate in forwards
        .map(|it| it.collect::<Face>())
        .chain(backwards.map(|it| it.collect::<Face>()))
    {
        if best.as_ref().is_none_or(|b| candidate < *b) {
            best = Some(candidate);
        }
    }
    best.unwrap_or_default()
}

/// Returns whether `candidate` is a rotation or reversed rotation of a face
/// already in `existing`, which holds canonical forms.
pub fn is_duplicate_face(candidate: &[VertexId], existing: &HashSet<Face>) -> bool {
    existing.contains(&canonical_face(candidate))
}

/// Returns whether `a` and `b` are the same face.
pub fn same_face(a: &[VertexId], b: &[VertexId]) -> bool {
    a.len() == b.len() && canonical_face(a) == canonical_face(b)
}

/// Returns whether the vertices `u` and `v` are adjacent along the boundary of
/// `face`.
pub fn face_has_edge(face: &[VertexId], [u, v]: Edge) -> bool {
    face_edges(face).any(|[a, b]| (a == u && b == v) || (a == v && b == u))
}

/// Returns whether two faces share an edge. Faces adjacent in a vertex link
/// of a dual always do.
pub fn share_edge(a: &[VertexId], b: &[VertexId]) -> bool {
    face_edges(a).any(|e| face_has_edge(b, e))
}

/// Returns the edges along the boundary of a face.
pub fn face_edges(face: &[VertexId]) -> impl Iterator<Item = Edge> + '_ {
    let n = face.len();
    (0..n).map(move |i| [face[i], face[(i + 1) % n]])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn face(ids: &[u32]) -> Face {
        ids.iter().map(|&i| VertexId(i)).collect()
    }

    #[test]
    fn test_orbit_type_display() {
        let snub = OrbitType::SnubPolygon(vec![Word::from([0, 1]), Word::from([]), Word::from([2])]);
        assert_eq!(snub.to_string(), "snub polygon [01, e, 2]");
        assert_eq!(OrbitType::SnubPolygon(vec![]).to_string(), "snub polygon []");
        assert_eq!(OrbitType::MirrorPair(GeneratorId(0), GeneratorId(2)).to_string(), "mirrors (0, 2)");
    }

    #[test]
    fn test_canonical_face() {
        assert_eq!(canonical_face(&face(&[3, 1, 2])), face(&[1, 2, 3]));
        assert_eq!(canonical_face(&face(&[3, 2, 1])), face(&[1, 2, 3]));
        assert_eq!(canonical_face(&face(&[5, 0, 7, 2])), face(&[0, 5, 2, 7]));
    }

    #[test]
    fn test_same_face() {
        assert!(same_face(&face(&[0, 1, 2, 3]), &face(&[2, 3, 0, 1])));
        assert!(same_face(&face(&[0, 1, 2, 3]), &face(&[1, 0, 3, 2])));
        // Same vertices in a different cyclic order is a different polygon.
        assert!(!same_face(&face(&[0, 1, 2, 3]), &face(&[0, 2, 1, 3])));
    }

    #[test]
    fn test_face_set() {
        let mut set = FaceSet::default();
        assert!(set.insert(face(&[0, 1, 2])));
        assert!(!set.insert(face(&[2, 1, 0])));
        assert!(!set.insert(face(&[1, 2, 0])));
        assert!(set.insert(face(&[0, 1, 3])));
        assert_eq!(set.into_vec().len(), 2);
    }

    #[test]
    fn test_edge_set() {
        let mut set = EdgeSet::default();
        assert!(set.insert([VertexId(3), VertexId(1)]));
        assert!(!set.insert([VertexId(1), VertexId(3)]));
        assert!(set.insert([VertexId(1), VertexId(2)]));
        assert_eq!(
            set.into_vec(),
            vec![[VertexId(3), VertexId(1)], [VertexId(1), VertexId(2)]],
        );
    }

    #[test]
    fn test_share_edge() {
        let square = face(&[0, 1, 2, 3]);
        assert!(share_edge(&square, &face(&[1, 0, 4, 5])));
        assert!(share_edge(&square, &face(&[3, 0, 6])));
        // Opposite corners are not an edge.
        assert!(!share_edge(&square, &face(&[0, 2, 7])));
        assert!(!share_edge(&square, &face(&[0, 8, 9])));
        assert!(face_has_edge(&square, [VertexId(0), VertexId(3)]));
    }
}
