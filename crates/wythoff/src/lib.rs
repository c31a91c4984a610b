//! Uniform polytopes by Wythoff construction.
//!
//! A polytope is described by a Coxeter diagram and the distance of an
//! initial vertex from each mirror. Vertices are the cosets of the stabilizer
//! of that vertex, so they come straight out of coset enumeration; edges and
//! faces are orbits of a base edge or face under the same group. Snub
//! polytopes use the rotation subgroup instead, and [`DualPolyhedron`] builds
//! the dual of any polyhedron from adjacency alone.
//!
//! ```
//! use wythoff::{Polyhedral, PolytopeBuilder, PolytopeFamily};
//!
//! let cube = PolytopeBuilder::new(PolytopeFamily::Polyhedron, [4_u16, 2, 3], &[1.0, 0.0, 0.0])?
//!     .build()?;
//! assert_eq!((cube.num_vertices(), cube.num_edges(), cube.num_faces()), (8, 12, 6));
//! # Ok::<(), wythoff::PolytopeError>(())
//! ```

mod config;
mod dual;
mod error;
mod orbit;
mod polytope;
pub mod presets;
mod snub;
mod symmetry;
mod wythoff;

#[cfg(test)]
mod tests;

pub use config::BuildConfig;
pub use dual::DualPolyhedron;
pub use error::{PolytopeError, PolytopeResult};
pub use orbit::{
    Edge, ElementGroup, Face, FaceId, GroupAction, OrbitRule, OrbitType, PerVertex, VertexId,
    VertexOrbit, canonical_face, face_edges, face_has_edge, is_duplicate_face, same_face,
    share_edge,
};
pub use polytope::{
    Polyhedral, Polytope, PolytopeBuilder, PolytopeFamily, SNUB_24_CELL_DIAGRAM, WithEdges,
    WithVertices,
};
pub use presets::Preset;
pub use snub::{RotationOrbit, RotationSystem};
pub use symmetry::SymmetryGroupModel;
pub use wythoff_group as group;
pub use wythoff_math as math;
