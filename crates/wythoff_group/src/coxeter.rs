use std::fmt;

use itertools::Itertools;
use wythoff_math::prelude::*;

use super::{GeneratorId, GroupError, GroupResult, Word};

/// Entry in a Coxeter diagram: the dihedral angle between two mirrors, written
/// as a fraction `num/den` of a half turn.
///
/// Plain integers have `den = 1`. Other denominators give star polytopes: the
/// mirrors meet at an angle of `π·den/num`, but the product of their
/// reflections still has order `num`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dihedral {
    /// Numerator, which is the order of the rotation generated by the two
    /// mirrors.
    pub num: u16,
    /// Denominator.
    pub den: u16,
}
impl Dihedral {
    /// Entry on the diagonal of a Coxeter matrix.
    pub const ONE: Self = Self { num: 1, den: 1 };
    /// Orthogonal mirrors.
    pub const TWO: Self = Self { num: 2, den: 1 };

    /// Constructs a rational entry `num/den`.
    pub const fn new(num: u16, den: u16) -> Self {
        Self { num, den }
    }

    /// Returns the order of the rotation generated by the two mirrors.
    pub fn order(self) -> usize {
        self.num as usize
    }
    /// Returns the angle between the two mirrors, in radians.
    pub fn angle(self) -> Float {
        std::f64::consts::PI * self.den as Float / self.num as Float
    }
}
impl From<u16> for Dihedral {
    fn from(num: u16) -> Self {
        Self { num, den: 1 }
    }
}
impl fmt::Display for Dihedral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.den {
            1 => write!(f, "{}", self.num),
            den => write!(f, "{}/{den}", self.num),
        }
    }
}

/// Coxeter diagram, given as the strict upper triangle of its Coxeter matrix
/// in row-major order.
///
/// For rank 3 this is `(m01, m02, m12)`; for rank 4 it is
/// `(m01, m02, m03, m12, m13, m23)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoxeterDiagram {
    rank: u8,
    entries: Vec<Dihedral>,
}
impl fmt::Display for CoxeterDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.entries.iter().join(", "))
    }
}
impl CoxeterDiagram {
    /// Constructs a diagram from its upper-triangle entries. Only ranks 3, 4,
    /// and 5 are supported.
    pub fn new(entries: impl IntoIterator<Item = impl Into<Dihedral>>) -> GroupResult<Self> {
        let entries = entries.into_iter().map(Into::into).collect_vec();
        let rank = match entries.len() {
            3 => 3,
            6 => 4,
            10 => 5,
            n => return Err(GroupError::BadDiagramArity(n)),
        };
        Ok(Self { rank, entries })
    }

    /// Returns the number of mirrors.
    pub fn rank(&self) -> u8 {
        self.rank
    }
    /// Returns the upper-triangle entries.
    pub fn entries(&self) -> &[Dihedral] {
        &self.entries
    }

    /// Returns the entry between mirrors `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[track_caller]
    pub fn get(&self, mut i: u8, mut j: u8) -> Dihedral {
        assert!(i < self.rank && j < self.rank, "mirror index out of range");
        if i == j {
            return Dihedral::ONE;
        }
        if j < i {
            std::mem::swap(&mut i, &mut j);
        }
        // Rows before `i` contribute `rank-1`, `rank-2`, ... entries.
        let n = self.rank as usize;
        let (i, j) = (i as usize, j as usize);
        let row_start = i * n - i * (i + 1) / 2;
        self.entries[row_start + (j - i - 1)]
    }

    /// Returns the full Coxeter matrix.
    pub fn coxeter_matrix(&self) -> GroupResult<CoxeterMatrix> {
        CoxeterMatrix::from_fn(self.rank, |i, j| self.get(i, j))
    }
}

/// Symmetric [Coxeter matrix](https://w.wiki/7SNw) with ones on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoxeterMatrix(Vec<Vec<Dihedral>>);
impl fmt::Display for CoxeterMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.iter().map(|row| row.iter().join(" "));
        write!(f, "[{}]", rows.format("; "))
    }
}
impl CoxeterMatrix {
    /// Constructs and validates a Coxeter matrix from a function that returns
    /// each element.
    pub fn from_fn(rank: u8, mut f: impl FnMut(u8, u8) -> Dihedral) -> GroupResult<Self> {
        Self::new(
            (0..rank)
                .map(|i| (0..rank).map(|j| f(i, j)).collect())
                .collect(),
        )
    }

    /// Constructs and validates a Coxeter matrix.
    pub fn new(rows: Vec<Vec<Dihedral>>) -> GroupResult<Self> {
        let n = rows.len();
        if n > u8::MAX as usize {
            return Err(GroupError::BadCoxeterMatrix("too many mirrors"));
        }
        if rows.iter().any(|r| r.len() != n) {
            return Err(GroupError::BadCoxeterMatrix("matrix is not square"));
        }
        for i in 0..n {
            for j in 0..=i {
                let m = rows[i][j];
                if m != rows[j][i] {
                    return Err(GroupError::BadCoxeterMatrix("matrix is not symmetric"));
                }
                if i == j {
                    if m.num != 1 {
                        return Err(GroupError::BadCoxeterMatrix("diagonal entry is not 1"));
                    }
                } else if m.num < 2 || m.den == 0 || m.den >= m.num {
                    return Err(GroupError::BadCoxeterMatrix("invalid off-diagonal entry"));
                }
            }
        }
        Ok(Self(rows))
    }

    /// Returns the number of mirrors.
    pub fn rank(&self) -> u8 {
        self.0.len() as u8
    }
    /// Returns an entry of the matrix.
    #[track_caller]
    pub fn get(&self, i: u8, j: u8) -> Dihedral {
        self.0[i as usize][j as usize]
    }
    /// Returns the order of the product of the reflections `i` and `j`.
    #[track_caller]
    pub fn order(&self, i: u8, j: u8) -> usize {
        self.get(i, j).order()
    }

    /// Returns the relators `(i j)^m` for every pair `i < j`.
    pub fn relators(&self) -> Vec<Word> {
        (0..self.rank())
            .tuple_combinations()
            .map(|(i, j)| Word::repeat(&[i, j], self.order(i, j)))
            .collect()
    }

    /// Computes a unit normal vector for each mirror.
    ///
    /// The mirrors form a lower-triangular matrix `L` with `L Lᵀ = A`, where
    /// `A` is the Schläfli matrix of the diagram. This is a Cholesky
    /// decomposition, computed with the Cholesky–Banachiewicz algorithm.
    /// <https://en.wikipedia.org/wiki/Cholesky_decomposition#Computation>
    pub fn mirrors(&self) -> GroupResult<Vec<Mirror>> {
        let n = self.0.len();
        let mut mirrors: Vec<Vector> = vec![];
        for i in 0..n {
            mirrors.push(Vector::zero(n as u8));
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..j as u8 {
                    sum += mirrors[i][k] * mirrors[j][k];
                }

                let mirror_dot = -self.0[i][j].angle().cos();
                if i == j {
                    let val = mirror_dot - sum;
                    if val < -EPSILON {
                        return Err(GroupError::HyperbolicDiagram);
                    } else if val < EPSILON {
                        return Err(GroupError::DegenerateDiagram);
                    }
                    mirrors[i][j as u8] = val.sqrt();
                } else {
                    mirrors[i][j as u8] = (mirror_dot - sum) / mirrors[j][j as u8];
                }
            }
        }
        Ok(mirrors.into_iter().map(Mirror).collect())
    }
}

/// Mirror hyperplane through the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror(pub Vector);
impl Mirror {
    /// Returns the unit normal vector of the mirror.
    pub fn normal(&self) -> &Vector {
        &self.0
    }
    /// Returns the reflection through the mirror.
    pub fn reflection(&self) -> Matrix {
        Matrix::from_reflection(&self.0)
    }
}

/// Geometric realization of a Coxeter group: its matrix, mirrors, and
/// reflections.
#[derive(Debug, Clone)]
pub struct CoxeterGroup {
    matrix: CoxeterMatrix,
    mirrors: Vec<Mirror>,
    reflections: Vec<Matrix>,
    /// Matrix that transforms from the mirror basis (where each component of
    /// the vector gives a distance from a mirror plane) to the base space.
    mirror_basis: Matrix,
}
impl PartialEq for CoxeterGroup {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}
impl fmt::Display for CoxeterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
impl CoxeterGroup {
    /// Constructs the group for a Coxeter diagram.
    pub fn from_diagram(diagram: &CoxeterDiagram) -> GroupResult<Self> {
        Self::new(diagram.coxeter_matrix()?)
    }

    /// Constructs the mirrors and reflections for a Coxeter matrix.
    pub fn new(matrix: CoxeterMatrix) -> GroupResult<Self> {
        let mirrors = matrix.mirrors()?;
        let mirror_basis = Matrix::from_rows(mirrors.iter().map(Mirror::normal))
            .inverse()
            .ok_or(GroupError::DegenerateDiagram)?;
        let reflections = mirrors.iter().map(Mirror::reflection).collect();
        Ok(Self {
            matrix,
            mirrors,
            reflections,
            mirror_basis,
        })
    }

    /// Returns the Coxeter matrix.
    pub fn matrix(&self) -> &CoxeterMatrix {
        &self.matrix
    }
    /// Returns the number of mirrors.
    pub fn mirror_count(&self) -> u8 {
        self.matrix.rank()
    }
    /// Returns the list of mirrors.
    pub fn mirrors(&self) -> &[Mirror] {
        &self.mirrors
    }
    /// Returns the reflection for each mirror.
    pub fn reflections(&self) -> &[Matrix] {
        &self.reflections
    }
    /// Returns the reflection through a single mirror.
    #[track_caller]
    pub fn reflection(&self, mirror: GeneratorId) -> &Matrix {
        &self.reflections[mirror.0 as usize]
    }
    /// Returns a matrix that transforms from the mirror basis to the base
    /// space.
    pub fn mirror_basis(&self) -> &Matrix {
        &self.mirror_basis
    }

    /// Returns the unit-length point whose distances from the mirrors are
    /// proportional to `distances`.
    pub fn initial_point(&self, distances: &[Float]) -> GroupResult<Vector> {
        let expected = self.mirror_count() as usize;
        if distances.len() != expected {
            return Err(GroupError::BadDistanceCount {
                expected,
                got: distances.len(),
            });
        }
        let distances: Vector = distances.iter().copied().collect();
        (&self.mirror_basis * distances)
            .normalize()
            .ok_or(GroupError::DegeneratePoint)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wythoff_math::assert_approx_eq;

    use super::*;

    #[test]
    fn test_diagram_indexing() {
        let d = CoxeterDiagram::new([5_u16, 2, 3, 4, 2, 3]).unwrap();
        assert_eq!(d.rank(), 4);
        assert_eq!(d.get(0, 1), Dihedral::from(5));
        assert_eq!(d.get(0, 3), Dihedral::from(3));
        assert_eq!(d.get(1, 2), Dihedral::from(4));
        assert_eq!(d.get(3, 2), Dihedral::from(3));
        assert_eq!(d.get(2, 2), Dihedral::ONE);
    }

    #[test]
    fn test_bad_arity() {
        assert_eq!(
            CoxeterDiagram::new([4_u16, 3]),
            Err(GroupError::BadDiagramArity(2)),
        );
        assert_eq!(
            CoxeterDiagram::new([3_u16, 2, 2, 3]),
            Err(GroupError::BadDiagramArity(4)),
        );
    }

    #[test]
    fn test_bad_matrix() {
        let d = CoxeterDiagram::new([4_u16, 1, 3]).unwrap();
        assert!(matches!(
            d.coxeter_matrix(),
            Err(GroupError::BadCoxeterMatrix(_)),
        ));
    }

    #[test]
    fn test_mirror_angles() {
        let g = CoxeterGroup::from_diagram(&CoxeterDiagram::new([4_u16, 2, 3]).unwrap()).unwrap();
        let m = g.mirrors();
        for i in 0..3 {
            assert_approx_eq!(m[i].normal().mag(), 1.0);
        }
        let pi = std::f64::consts::PI;
        assert_approx_eq!(m[0].normal().dot(m[1].normal()), -(pi / 4.0).cos());
        assert_approx_eq!(m[0].normal().dot(m[2].normal()), 0.0);
        assert_approx_eq!(m[1].normal().dot(m[2].normal()), -(pi / 3.0).cos());
    }

    #[test]
    fn test_star_mirror_angle() {
        let d = CoxeterDiagram::new([Dihedral::new(5, 2), 2.into(), 5.into()]).unwrap();
        let g = CoxeterGroup::from_diagram(&d).unwrap();
        let m = g.mirrors();
        let expected = -(2.0 * std::f64::consts::PI / 5.0).cos();
        assert_approx_eq!(m[0].normal().dot(m[1].normal()), expected);
        assert_eq!(g.matrix().order(0, 1), 5);
    }

    #[test]
    fn test_hyperbolic_and_euclidean() {
        let hyperbolic = CoxeterDiagram::new([7_u16, 2, 3]).unwrap();
        assert_eq!(
            CoxeterGroup::from_diagram(&hyperbolic).unwrap_err(),
            GroupError::HyperbolicDiagram,
        );
        // {4,4} tiles the plane, so its Gram matrix is singular.
        let euclidean = CoxeterDiagram::new([4_u16, 2, 4]).unwrap();
        assert_eq!(
            CoxeterGroup::from_diagram(&euclidean).unwrap_err(),
            GroupError::DegenerateDiagram,
        );
    }

    #[test]
    fn test_initial_point() {
        let g = CoxeterGroup::from_diagram(&CoxeterDiagram::new([4_u16, 2, 3]).unwrap()).unwrap();
        let p = g.initial_point(&[1.0, 0.0, 0.0]).unwrap();
        assert_approx_eq!(p.mag(), 1.0);
        assert!(p.dot(g.mirrors()[0].normal()) > EPSILON);
        assert_approx_eq!(p.dot(g.mirrors()[1].normal()), 0.0);
        assert_approx_eq!(p.dot(g.mirrors()[2].normal()), 0.0);

        assert_eq!(
            g.initial_point(&[0.0, 0.0, 0.0]),
            Err(GroupError::DegeneratePoint),
        );
        assert_eq!(
            g.initial_point(&[1.0, 0.0]),
            Err(GroupError::BadDistanceCount {
                expected: 3,
                got: 2,
            }),
        );
    }

    #[test]
    fn test_reflections_are_involutions() {
        let g = CoxeterGroup::from_diagram(&CoxeterDiagram::new([5_u16, 2, 3]).unwrap()).unwrap();
        for r in g.reflections() {
            assert_approx_eq!(r * r, Matrix::ident(3));
        }
    }

    #[test]
    fn test_relators() {
        let m = CoxeterDiagram::new([3_u16, 2, 4]).unwrap().coxeter_matrix().unwrap();
        assert_eq!(
            m.relators(),
            vec![
                Word::repeat(&[0, 1], 3),
                Word::repeat(&[0, 2], 2),
                Word::repeat(&[1, 2], 4),
            ],
        );
    }
}
