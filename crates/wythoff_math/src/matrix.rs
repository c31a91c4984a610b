//! Square matrices for reflections and changes of basis.

use std::ops::Mul;

use crate::{EPSILON, Float, Vector, VectorRef};

/// Square matrix, stored in row-major order. Entries outside the matrix read
/// as entries of the identity, so a small matrix acts on a larger vector by
/// leaving the extra components alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    ndim: u8,
    elems: Vec<Float>,
}

impl Matrix {
    /// Returns the identity matrix.
    pub fn ident(ndim: u8) -> Self {
        Self::from_fn(ndim, identity_entry)
    }

    /// Constructs a matrix from `f(row, col)`.
    pub fn from_fn(ndim: u8, mut f: impl FnMut(u8, u8) -> Float) -> Self {
        let elems = (0..ndim)
            .flat_map(|row| (0..ndim).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { ndim, elems }
    }

    /// Constructs a matrix whose rows are the given vectors. The number of
    /// rows sets the size.
    pub fn from_rows<V: VectorRef>(rows: impl IntoIterator<Item = V>) -> Self {
        let rows: Vec<V> = rows.into_iter().collect();
        Self::from_fn(rows.len() as u8, |row, col| rows[row as usize].get(col))
    }

    /// Returns the reflection through the hyperplane with unit normal `n`,
    /// which is `I - 2 n nᵀ`.
    pub fn from_reflection(n: impl VectorRef) -> Self {
        Self::from_fn(n.ndim(), |row, col| {
            identity_entry(row, col) - 2.0 * n.get(row) * n.get(col)
        })
    }

    /// Returns the size of the matrix.
    pub fn ndim(&self) -> u8 {
        self.ndim
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: u8, col: u8) -> Float {
        if row < self.ndim && col < self.ndim {
            self.elems[row as usize * self.ndim as usize + col as usize]
        } else {
            identity_entry(row, col)
        }
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ndim, |row, col| self.get(col, row))
    }

    /// Returns the inverse, or `None` if the matrix is singular.
    ///
    /// Uses Gauss–Jordan elimination with partial pivoting.
    pub fn inverse(&self) -> Option<Self> {
        let n = self.ndim as usize;
        let mut lhs: Vec<Vec<Float>> = (0..self.ndim)
            .map(|r| (0..self.ndim).map(|c| self.get(r, c)).collect())
            .collect();
        let mut rhs: Vec<Vec<Float>> = (0..self.ndim)
            .map(|r| (0..self.ndim).map(|c| identity_entry(r, c)).collect())
            .collect();

        for k in 0..n {
            let pivot = (k..n).max_by(|&i, &j| lhs[i][k].abs().total_cmp(&lhs[j][k].abs()))?;
            if lhs[pivot][k].abs() < EPSILON {
                return None;
            }
            lhs.swap(pivot, k);
            rhs.swap(pivot, k);

            let scale = lhs[k][k];
            lhs[k].iter_mut().for_each(|x| *x /= scale);
            rhs[k].iter_mut().for_each(|x| *x /= scale);

            for i in (0..n).filter(|&i| i != k) {
                let factor = lhs[i][k];
                for j in 0..n {
                    lhs[i][j] -= factor * lhs[k][j];
                    rhs[i][j] -= factor * rhs[k][j];
                }
            }
        }

        Some(Self::from_fn(self.ndim, |r, c| rhs[r as usize][c as usize]))
    }
}

fn identity_entry(row: u8, col: u8) -> Float {
    if row == col { 1.0 } else { 0.0 }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        let n = std::cmp::max(self.ndim, rhs.ndim);
        Matrix::from_fn(n, |row, col| {
            (0..n).map(|k| self.get(row, k) * rhs.get(k, col)).sum()
        })
    }
}
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        &self * &rhs
    }
}

impl<V: VectorRef> Mul<V> for &Matrix {
    type Output = Vector;

    fn mul(self, v: V) -> Vector {
        let n = std::cmp::max(self.ndim, v.ndim());
        (0..n)
            .map(|row| (0..n).map(|col| self.get(row, col) * v.get(col)).sum())
            .collect()
    }
}
impl<V: VectorRef> Mul<V> for Matrix {
    type Output = Vector;

    fn mul(self, v: V) -> Vector {
        &self * v
    }
}

impl approx::AbsDiffEq for Matrix {
    type Epsilon = Float;

    fn default_epsilon() -> Float {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Float) -> bool {
        let n = std::cmp::max(self.ndim, other.ndim);
        (0..n).all(|r| (0..n).all(|c| self.get(r, c).abs_diff_eq(&other.get(r, c), epsilon)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, vector};

    fn rows(rows: &[&[Float]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.iter().copied().collect::<Vector>()))
    }

    #[test]
    fn test_product_pads_with_identity() {
        let a = rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = rows(&[&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 2.0]]);
        assert_eq!(
            &a * &b,
            rows(&[&[2.0, 1.0, 0.0], &[4.0, 3.0, 0.0], &[0.0, 0.0, 2.0]]),
        );
        assert_eq!(&a * vector![1.0, 1.0, 5.0], vector![3.0, 7.0, 5.0]);
    }

    #[test]
    fn test_inverse() {
        let m = rows(&[&[1.0, 1.0, -3.0], &[0.0, 1.0, 0.0], &[4.0, 6.0, -10.0]]);
        let inv = m.inverse().unwrap();
        assert_approx_eq!(&m * &inv, Matrix::ident(3));
        assert_approx_eq!(&inv * &m, Matrix::ident(3));

        assert_eq!(rows(&[&[1.0, 2.0], &[2.0, 4.0]]).inverse(), None);
    }

    #[test]
    fn test_transpose() {
        let m = rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.transpose(), rows(&[&[1.0, 3.0], &[2.0, 4.0]]));
    }

    #[test]
    fn test_reflection() {
        let normal = vector![1.0, 2.0, 2.0] / 3.0;
        let r = Matrix::from_reflection(&normal);
        assert_approx_eq!(&r * &r, Matrix::ident(3));
        assert_approx_eq!(r.transpose(), r.clone());
        assert_approx_eq!(&r * &normal, -&normal);
        assert_approx_eq!(&r * vector![2.0, -1.0, 0.0], vector![2.0, -1.0, 0.0]);
    }
}
