//! Staged construction of polytopes.

use std::fmt;

use itertools::Itertools;
use wythoff_group::{CoxeterDiagram, Dihedral, Word, parse_dynkin_notation};
use wythoff_math::prelude::*;

use crate::{
    BuildConfig, Edge, ElementGroup, Face, GroupAction, OrbitRule, PerVertex, PolytopeError,
    PolytopeResult, RotationSystem, SymmetryGroupModel, VertexId, VertexOrbit,
};

/// Coxeter diagram of `[3^{1,1,1}]`, with the branch at mirror 1. The
/// rotation generators of the snub 24-cell pair mirror 1 with each of the
/// others.
pub const SNUB_24_CELL_DIAGRAM: [u16; 6] = [3, 2, 2, 3, 3, 2];

/// Kind of polytope to build, which determines the rank of the diagram and
/// the shape of the group action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolytopeFamily {
    /// Uniform polyhedron from a rank-3 reflection group.
    Polyhedron,
    /// Uniform polychoron from a rank-4 reflection group.
    Polychoron,
    /// Uniform 5-polytope from a rank-5 reflection group.
    Polyteron,
    /// Snub polyhedron from the rotation subgroup of a rank-3 group.
    Snub,
    /// Snub polychoron from the rotation subgroup `[3^{1,1,1}]+`. The only
    /// accepted diagram is [`SNUB_24_CELL_DIAGRAM`].
    Snub24Cell,
}
impl fmt::Display for PolytopeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Polyhedron => "polyhedron",
            Self::Polychoron => "polychoron",
            Self::Polyteron => "polyteron",
            Self::Snub => "snub polyhedron",
            Self::Snub24Cell => "snub 24-cell",
        };
        write!(f, "{s}")
    }
}
impl PolytopeFamily {
    /// Returns the number of mirrors.
    pub fn rank(self) -> u8 {
        match self {
            Self::Polyhedron | Self::Snub => 3,
            Self::Polychoron | Self::Snub24Cell => 4,
            Self::Polyteron => 5,
        }
    }
    /// Returns the number of entries in a Coxeter diagram of this rank.
    pub fn diagram_len(self) -> usize {
        let n = self.rank() as usize;
        n * (n - 1) / 2
    }
    /// Returns whether the family uses a rotation subgroup instead of the full
    /// reflection group.
    pub fn is_snub(self) -> bool {
        matches!(self, Self::Snub | Self::Snub24Cell)
    }

    /// Returns the group action for a model of this family.
    fn group_action(self, model: &SymmetryGroupModel) -> GroupAction {
        match self {
            Self::Polyhedron | Self::Polychoron | Self::Polyteron => GroupAction::Reflection,
            Self::Snub => GroupAction::Rotation(RotationSystem::snub_polyhedron(model)),
            Self::Snub24Cell => GroupAction::Rotation(RotationSystem::snub_demitesseract(model)),
        }
    }
}

/// Polyhedron-like structure: vertex coordinates plus grouped edges and
/// faces.
pub trait Polyhedral {
    /// Returns the number of dimensions of the vertex coordinates.
    fn ndim(&self) -> u8;
    /// Returns the coordinates of each vertex.
    fn vertex_coords(&self) -> &PerVertex<Vector>;
    /// Returns the edges, grouped by orbit.
    fn edge_groups(&self) -> &[ElementGroup<Edge>];
    /// Returns the faces, grouped by orbit.
    fn face_groups(&self) -> &[ElementGroup<Face>];

    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertex_coords().len()
    }
    /// Returns the number of edges.
    fn num_edges(&self) -> usize {
        self.edge_groups().iter().map(|g| g.len()).sum()
    }
    /// Returns the number of faces.
    fn num_faces(&self) -> usize {
        self.face_groups().iter().map(|g| g.len()).sum()
    }

    /// Returns every edge, ignoring groups.
    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_groups().iter().flat_map(|g| &g.elements)
    }
    /// Returns every face, ignoring groups. The position of a face in this
    /// iterator is its [`FaceId`](crate::FaceId).
    fn faces(&self) -> impl Iterator<Item = &Face> {
        self.face_groups().iter().flat_map(|g| &g.elements)
    }

    /// Returns the endpoint coordinates of each edge, grouped the same way as
    /// [`Polyhedral::edge_groups()`].
    fn edge_coords(&self) -> Vec<Vec<[Vector; 2]>> {
        let coords = self.vertex_coords();
        self.edge_groups()
            .iter()
            .map(|g| {
                g.elements
                    .iter()
                    .map(|&[a, b]| [coords[a].clone(), coords[b].clone()])
                    .collect()
            })
            .collect()
    }
    /// Returns the vertex coordinates of each face, grouped the same way as
    /// [`Polyhedral::face_groups()`].
    fn face_coords(&self) -> Vec<Vec<Vec<Vector>>> {
        self.face_groups()
            .iter()
            .map(|g| {
                g.elements
                    .iter()
                    .map(|f| self.coords_of(f))
                    .collect()
            })
            .collect()
    }
    /// Returns the coordinates of a list of vertices.
    fn coords_of(&self, vertices: &[VertexId]) -> Vec<Vector> {
        let coords = self.vertex_coords();
        vertices.iter().map(|&v| coords[v].clone()).collect()
    }

    /// Returns `V - E + F`.
    fn euler_characteristic(&self) -> isize {
        self.num_vertices() as isize - self.num_edges() as isize + self.num_faces() as isize
    }
}

/// Fully built polytope. It cannot be modified after construction.
#[derive(Debug, Clone)]
pub struct Polytope {
    family: PolytopeFamily,
    model: SymmetryGroupModel,
    action: GroupAction,
    vertices: VertexOrbit,
    edges: Vec<ElementGroup<Edge>>,
    faces: Vec<ElementGroup<Face>>,
}
impl Polyhedral for Polytope {
    fn ndim(&self) -> u8 {
        self.model.rank()
    }
    fn vertex_coords(&self) -> &PerVertex<Vector> {
        self.vertices.coords()
    }
    fn edge_groups(&self) -> &[ElementGroup<Edge>] {
        &self.edges
    }
    fn face_groups(&self) -> &[ElementGroup<Face>] {
        &self.faces
    }
}
impl fmt::Display for Polytope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: V={} E={} F={}",
            self.family,
            self.model.diagram(),
            self.model.dynkin_string(),
            self.num_vertices(),
            self.num_edges(),
            self.num_faces(),
        )
    }
}
impl Polytope {
    /// Returns the family the polytope was built as.
    pub fn family(&self) -> PolytopeFamily {
        self.family
    }
    /// Returns the symmetry group model.
    pub fn model(&self) -> &SymmetryGroupModel {
        &self.model
    }
    /// Returns the group action used to build the polytope.
    pub fn action(&self) -> &GroupAction {
        &self.action
    }
    /// Returns the vertex orbit, including its coset table.
    pub fn vertices(&self) -> &VertexOrbit {
        &self.vertices
    }
    /// Returns the word leading to each vertex from the initial vertex.
    pub fn vertex_words(&self) -> &[Word] {
        self.vertices.words()
    }
}

/// Parses mirror distances in Dynkin notation for a family.
pub(crate) fn dynkin_distances(family: PolytopeFamily, dynkin: &str) -> PolytopeResult<Vec<Float>> {
    parse_dynkin_notation(family.rank(), dynkin)
        .map_err(|e| PolytopeError::BadDynkinNotation(e.to_string()))
}

/// First stage of polytope construction: the symmetry group is known but
/// nothing has been enumerated.
#[derive(Debug, Clone)]
pub struct PolytopeBuilder {
    family: PolytopeFamily,
    model: SymmetryGroupModel,
    action: GroupAction,
    config: BuildConfig,
}
impl PolytopeBuilder {
    /// Validates the inputs and derives the symmetry group.
    ///
    /// `diagram` lists the upper triangle of the Coxeter matrix and
    /// `distances` gives the distance of the initial vertex from each mirror.
    pub fn new(
        family: PolytopeFamily,
        diagram: impl IntoIterator<Item = impl Into<Dihedral>>,
        distances: &[Float],
    ) -> PolytopeResult<Self> {
        Self::with_extra_relators(family, diagram, distances, [])
    }

    /// Same as [`PolytopeBuilder::new()`], but imposes additional relators on
    /// the reflection group. This can present star and skew polytopes.
    pub fn with_extra_relators(
        family: PolytopeFamily,
        diagram: impl IntoIterator<Item = impl Into<Dihedral>>,
        distances: &[Float],
        extra_relators: impl IntoIterator<Item = Word>,
    ) -> PolytopeResult<Self> {
        let entries = diagram.into_iter().map(Into::into).collect_vec();
        let mismatch = |what, expected, got| PolytopeError::DimensionMismatch {
            family,
            what,
            expected,
            got,
        };
        if entries.len() != family.diagram_len() {
            return Err(mismatch("diagram entries", family.diagram_len(), entries.len()));
        }
        if distances.len() != family.rank() as usize {
            return Err(mismatch("mirror distances", family.rank() as usize, distances.len()));
        }

        let diagram = CoxeterDiagram::new(entries)?;
        let extra_relators = extra_relators.into_iter().collect_vec();
        if family.is_snub() && !extra_relators.is_empty() {
            return Err(PolytopeError::ExtraRelatorsOnSnub(family));
        }
        if family == PolytopeFamily::Snub24Cell {
            let expected = CoxeterDiagram::new(SNUB_24_CELL_DIAGRAM)?;
            if diagram != expected {
                return Err(PolytopeError::UnsupportedDiagram {
                    family,
                    expected,
                    got: diagram,
                });
            }
        }

        let model = SymmetryGroupModel::derive(diagram, distances, extra_relators)?;
        let action = family.group_action(&model);
        Ok(Self {
            family,
            model,
            action,
            config: BuildConfig::default(),
        })
    }

    /// Same as [`PolytopeBuilder::new()`], but reads the mirror distances from
    /// Dynkin notation such as `"xoo"`.
    pub fn from_dynkin(
        family: PolytopeFamily,
        diagram: impl IntoIterator<Item = impl Into<Dihedral>>,
        dynkin: &str,
    ) -> PolytopeResult<Self> {
        Self::new(family, diagram, &dynkin_distances(family, dynkin)?)
    }

    /// Sets the build configuration.
    #[must_use]
    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the symmetry group model.
    pub fn model(&self) -> &SymmetryGroupModel {
        &self.model
    }

    /// Enumerates vertices.
    pub fn build_vertices(self) -> PolytopeResult<WithVertices> {
        let vertices = self.action.build_vertices(&self.model, &self.config)?;
        log::debug!("{} vertices for {}", vertices.len(), self.family);
        Ok(WithVertices {
            builder: self,
            vertices,
        })
    }

    /// Runs every stage.
    pub fn build(self) -> PolytopeResult<Polytope> {
        self.build_vertices()?.build_edges()?.build_faces()
    }
}

/// Second stage of polytope construction: vertices are known.
#[derive(Debug, Clone)]
pub struct WithVertices {
    builder: PolytopeBuilder,
    vertices: VertexOrbit,
}
impl WithVertices {
    /// Returns the vertices.
    pub fn vertices(&self) -> &VertexOrbit {
        &self.vertices
    }

    /// Enumerates edges.
    pub fn build_edges(self) -> PolytopeResult<WithEdges> {
        let b = &self.builder;
        let edges = b.action.build_edges(&b.model, &self.vertices, &b.config)?;
        Ok(WithEdges { prev: self, edges })
    }
}

/// Third stage of polytope construction: vertices and edges are known.
#[derive(Debug, Clone)]
pub struct WithEdges {
    prev: WithVertices,
    edges: Vec<ElementGroup<Edge>>,
}
impl WithEdges {
    /// Returns the vertices.
    pub fn vertices(&self) -> &VertexOrbit {
        &self.prev.vertices
    }
    /// Returns the edges, grouped by orbit.
    pub fn edges(&self) -> &[ElementGroup<Edge>] {
        &self.edges
    }

    /// Enumerates faces and returns the finished polytope.
    pub fn build_faces(self) -> PolytopeResult<Polytope> {
        let WithVertices { builder, vertices } = self.prev;
        let faces = builder
            .action
            .build_faces(&builder.model, &vertices, &builder.config)?;

        let polytope = Polytope {
            family: builder.family,
            model: builder.model,
            action: builder.action,
            vertices,
            edges: self.edges,
            faces,
        };
        log::info!("built {polytope}");
        Ok(polytope)
    }
}
