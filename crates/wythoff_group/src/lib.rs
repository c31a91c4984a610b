//! Coxeter diagrams, finitely presented groups, and coset enumeration.
//!
//! The central operation is [`enumerate_cosets()`], which computes the action
//! of a finitely presented group on the cosets of a subgroup using the
//! Todd–Coxeter algorithm.

mod common;
mod coxeter;
mod dynkin;
mod finite_coxeter_group;
mod presentation;
mod todd_coxeter;

pub use common::*;
pub use coxeter::*;
pub use dynkin::{DynkinNotationError, dynkin_char, parse_dynkin_notation};
pub use finite_coxeter_group::FiniteCoxeterGroup;
pub use presentation::{EnumerationMode, Presentation};
pub use todd_coxeter::{CosetTable, EnumerationLimits, enumerate_cosets};
