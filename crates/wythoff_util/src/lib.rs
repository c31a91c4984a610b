//! Utilities shared by the Wythoff polytope crates.

#[macro_use]
mod macros;
pub mod error;
pub mod ti;
