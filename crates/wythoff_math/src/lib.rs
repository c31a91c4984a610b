//! Multidimensional vector and matrix primitives.

pub use {approx, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

mod matrix;
mod polygon;
mod vector;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx::AbsDiffEq;

    pub use crate::matrix::Matrix;
    pub use crate::polygon::face_normal;
    pub use crate::vector::{Vector, VectorRef};
    pub use crate::{EPSILON, Float, vector};
}
pub use prelude::*;
