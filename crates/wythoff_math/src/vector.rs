//! Points and directions in 3 to 5 dimensions.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{EPSILON, Float};

/// Constructs a [`Vector`] with the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// Vector of any dimension. Missing trailing components read as zero, so
/// vectors of different lengths combine as if padded.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 5]>);

/// Anything that can be read component-by-component as a vector, such as a
/// [`Vector`] or a row of a [`crate::Matrix`].
pub trait VectorRef: Sized + fmt::Debug {
    /// Returns the number of stored components.
    fn ndim(&self) -> u8;
    /// Returns component `i`, or zero past the end.
    fn get(&self, i: u8) -> Float;

    /// Returns an iterator over the stored components.
    fn components(&self) -> impl Iterator<Item = Float> + '_ {
        (0..self.ndim()).map(move |i| self.get(i))
    }

    /// Returns the dot product.
    fn dot(&self, rhs: impl VectorRef) -> Float {
        let n = std::cmp::min(self.ndim(), rhs.ndim());
        (0..n).map(|i| self.get(i) * rhs.get(i)).sum()
    }

    /// Returns the Euclidean length.
    fn mag(&self) -> Float {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector in the same direction, or `None` for a vector
    /// of (nearly) zero length.
    #[must_use]
    fn normalize(&self) -> Option<Vector> {
        let mag = self.mag();
        (mag >= EPSILON).then(|| self.components().map(|x| x / mag).collect())
    }
}

impl VectorRef for Vector {
    fn ndim(&self) -> u8 {
        self.0.len() as u8
    }
    fn get(&self, i: u8) -> Float {
        self.0.get(i as usize).copied().unwrap_or(0.0)
    }
}
impl<V: VectorRef> VectorRef for &V {
    fn ndim(&self) -> u8 {
        V::ndim(self)
    }
    fn get(&self, i: u8) -> Float {
        V::get(self, i)
    }
}

impl Vector {
    /// Returns the origin in `ndim` dimensions.
    pub fn zero(ndim: u8) -> Self {
        Self(smallvec::smallvec![0.0; ndim as usize])
    }

    fn combine(a: impl VectorRef, b: impl VectorRef, f: impl Fn(Float, Float) -> Float) -> Self {
        let n = std::cmp::max(a.ndim(), b.ndim());
        (0..n).map(|i| f(a.get(i), b.get(i))).collect()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<u8> for Vector {
    type Output = Float;

    fn index(&self, i: u8) -> &Float {
        &self.0[i as usize]
    }
}
impl IndexMut<u8> for Vector {
    fn index_mut(&mut self, i: u8) -> &mut Float {
        &mut self.0[i as usize]
    }
}

// Arithmetic is implemented for both owned and borrowed vectors so that
// callers can write `&a - &b` without cloning.
macro_rules! impl_arithmetic {
    ($($t:ty),*) => {$(
        impl<V: VectorRef> Add<V> for $t {
            type Output = Vector;
            fn add(self, rhs: V) -> Vector {
                Vector::combine(self, rhs, |a, b| a + b)
            }
        }
        impl<V: VectorRef> Sub<V> for $t {
            type Output = Vector;
            fn sub(self, rhs: V) -> Vector {
                Vector::combine(self, rhs, |a, b| a - b)
            }
        }
        impl Neg for $t {
            type Output = Vector;
            fn neg(self) -> Vector {
                self.components().map(|x| -x).collect()
            }
        }
        impl Mul<Float> for $t {
            type Output = Vector;
            fn mul(self, rhs: Float) -> Vector {
                self.components().map(|x| x * rhs).collect()
            }
        }
        impl Div<Float> for $t {
            type Output = Vector;
            fn div(self, rhs: Float) -> Vector {
                self.components().map(|x| x / rhs).collect()
            }
        }
    )*};
}
impl_arithmetic!(Vector, &Vector);

impl approx::AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Float {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Float) -> bool {
        let n = std::cmp::max(self.ndim(), other.ndim());
        (0..n).all(|i| self.get(i).abs_diff_eq(&other.get(i), epsilon))
    }
}
