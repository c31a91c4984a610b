//! Typed index collections.
//!
//! Vertices, cosets, generators, and faces are all plain integers underneath.
//! Wrapping each kind in a newtype keeps them from being mixed up, and
//! [`TiVec`] only accepts the index type it was declared with.

mod index;
mod vec;

pub use index::TypedIndex;
pub use vec::TiVec;
