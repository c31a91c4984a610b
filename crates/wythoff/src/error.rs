use wythoff_group::{CoxeterDiagram, GroupError};
use wythoff_util::error::IndexOverflow;

use crate::{FaceId, PolytopeFamily, VertexId};

/// Error that can occur while building a polytope or its dual.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PolytopeError {
    #[error("{family} expects {expected} {what} but got {got}")]
    DimensionMismatch {
        family: PolytopeFamily,
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{family} is only built from diagram {expected}, not {got}")]
    UnsupportedDiagram {
        family: PolytopeFamily,
        expected: CoxeterDiagram,
        got: CoxeterDiagram,
    },
    #[error("{0} takes its relators from the rotation subgroup; extra relators are not supported")]
    ExtraRelatorsOnSnub(PolytopeFamily),
    #[error("bad mirror distances: {0}")]
    BadDynkinNotation(String),
    #[error("dual is only defined for polyhedra, not {ndim}D polytopes")]
    NotAPolyhedron { ndim: u8 },
    #[error("face {0} is degenerate; it has no normal or passes through the origin")]
    DegenerateFace(FaceId),
    #[error("faces around vertex {0} do not form a single cycle")]
    NonManifoldVertexLink(VertexId),
    #[error("edge ({0}, {1}) lies on {2} faces instead of 2")]
    NonManifoldEdge(VertexId, VertexId, usize),
    #[error("overflow ({0})")]
    Overflow(IndexOverflow),
    #[error(transparent)]
    Group(#[from] GroupError),
}
impl From<IndexOverflow> for PolytopeError {
    fn from(value: IndexOverflow) -> Self {
        PolytopeError::Overflow(value)
    }
}

/// Result type returned by polytope construction.
pub type PolytopeResult<T> = Result<T, PolytopeError>;
