//! Square matrices: products, determinants and inverses.

use std::array;
use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{NumCast, ToPrimitive};
use tracing::trace;

use crate::error::{MathError, Result};

use super::scalar::{Real, Scalar};
use super::tolerance::approx_eq;
use super::vector::Vector;

/// `N`x`N` matrix stored in row-major order.
///
/// [`Default`] is the identity. Like [`Vector`], equality is tolerance-based
/// for float elements.
#[derive(Debug, Clone, Copy)]
pub struct SquareMatrix<T, const N: usize> {
    rows: [[T; N]; N],
}

/// Row-major product as a sum of outer products: column `k` of `lhs` times
/// row `k` of `rhs`, accumulated over `k`.
pub(crate) fn mul_outer<T: Scalar, const N: usize>(
    lhs: &[[T; N]; N],
    rhs: &[[T; N]; N],
) -> [[T; N]; N] {
    let mut out = [[T::zero(); N]; N];
    for k in 0..N {
        for (out_row, lhs_row) in out.iter_mut().zip(lhs.iter()) {
            let a = lhs_row[k];
            for (dst, &b) in out_row.iter_mut().zip(rhs[k].iter()) {
                *dst += a * b;
            }
        }
    }
    out
}

impl<T: Scalar, const N: usize> SquareMatrix<T, N> {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_diagonal(Vector::splat(T::one()))
    }

    /// The zero matrix.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            rows: [[T::zero(); N]; N],
        }
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    #[must_use]
    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for (i, &d) in diagonal.as_array().iter().enumerate() {
            m.rows[i][i] = d;
        }
        m
    }

    /// Creates a matrix from row-major element arrays.
    #[must_use]
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { rows }
    }

    /// Creates a matrix whose rows are the given vectors.
    #[must_use]
    pub fn from_row_vectors(rows: [Vector<T, N>; N]) -> Self {
        Self {
            rows: rows.map(Vector::to_array),
        }
    }

    /// Creates a matrix whose columns are the given vectors.
    #[must_use]
    pub fn from_col_vectors(cols: [Vector<T, N>; N]) -> Self {
        Self::from_row_vectors(cols).transpose()
    }

    /// Borrows the row-major elements.
    #[must_use]
    pub fn as_rows(&self) -> &[[T; N]; N] {
        &self.rows
    }

    /// Returns row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if `i >= N`.
    pub fn row(&self, i: usize) -> Result<Vector<T, N>> {
        self.rows
            .get(i)
            .map(|r| Vector::from_array(*r))
            .ok_or_else(|| MathError::IndexOutOfBounds { index: i, len: N }.into())
    }

    /// Returns column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if `j >= N`.
    pub fn col(&self, j: usize) -> Result<Vector<T, N>> {
        if j >= N {
            return Err(MathError::IndexOutOfBounds { index: j, len: N }.into());
        }
        Ok(Vector::from_array(array::from_fn(|i| self.rows[i][j])))
    }

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if either index is `>= N`.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.row(i)?.get(j)
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: array::from_fn(|i| array::from_fn(|j| self.rows[j][i])),
        }
    }

    /// Matrix-vector product.
    #[must_use]
    pub fn dot(&self, v: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_array(self.rows.map(|r| Vector::from_array(r).dot(v)))
    }

    /// Matrix product computed without any vectorized path.
    ///
    /// `*` gives the same result within tolerance and may use SIMD.
    #[must_use]
    pub fn mul_portable(&self, rhs: &Self) -> Self {
        Self {
            rows: mul_outer(&self.rows, &rhs.rows),
        }
    }

    /// Divides every element by `s`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateDivisor`] if `s` is within tolerance of zero.
    pub fn try_div(&self, s: T) -> Result<Self> {
        if s.is_negligible() {
            return Err(MathError::DegenerateDivisor.into());
        }
        Ok(self.map(|e| e / s))
    }

    /// Converts every element to another numeric type.
    ///
    /// Returns `None` if an element is not representable in `U`.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Option<SquareMatrix<U, N>> {
        let mut rows = [[U::zero(); N]; N];
        for (dst_row, src_row) in rows.iter_mut().zip(self.rows.iter()) {
            for (dst, &src) in dst_row.iter_mut().zip(src_row.iter()) {
                *dst = <U as NumCast>::from(src)?;
            }
        }
        Some(SquareMatrix { rows })
    }

    fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            rows: self.rows.map(|r| r.map(&f)),
        }
    }
}

fn singular<T: Scalar>(determinant: T) -> MathError {
    MathError::SingularMatrix {
        determinant: determinant.to_f64().unwrap_or(f64::NAN),
    }
}

impl<T: Scalar> SquareMatrix<T, 2> {
    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }
}

impl<T: Real> SquareMatrix<T, 2> {
    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s], [s, c]])
    }

    /// Inverse by adjugate over determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is within
    /// tolerance of zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if approx_eq(det, T::zero()) {
            return Err(singular(det).into());
        }
        let m = &self.rows;
        Ok(Self::from_rows([[m[1][1], -m[0][1]], [-m[1][0], m[0][0]]]).map(|e| e / det))
    }
}

impl<T: Scalar> SquareMatrix<T, 3> {
    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - (m[2][0] * m[1][1] * m[0][2]
                + m[2][1] * m[1][2] * m[0][0]
                + m[2][2] * m[1][0] * m[0][1])
    }
}

impl<T: Real> SquareMatrix<T, 3> {
    /// Inverse by adjugate over determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is within
    /// tolerance of zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if approx_eq(det, T::zero()) {
            return Err(singular(det).into());
        }
        let m = &self.rows;
        // Cofactor of (r, c) lands at (c, r) of the adjugate.
        let cofactor = |r: usize, c: usize| {
            let (r0, r1) = ((r + 1) % 3, (r + 2) % 3);
            let (c0, c1) = ((c + 1) % 3, (c + 2) % 3);
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        Ok(Self::from_rows(array::from_fn(|i| {
            array::from_fn(|j| cofactor(j, i) / det)
        })))
    }
}

impl<T: Scalar> SquareMatrix<T, 4> {
    /// Determinant by full cofactor expansion (24 terms).
    #[must_use]
    pub fn determinant(&self) -> T {
        let v = &self.rows;
        v[0][3] * v[1][2] * v[2][1] * v[3][0] - v[0][2] * v[1][3] * v[2][1] * v[3][0]
            - v[0][3] * v[1][1] * v[2][2] * v[3][0]
            + v[0][1] * v[1][3] * v[2][2] * v[3][0]
            + v[0][2] * v[1][1] * v[2][3] * v[3][0]
            - v[0][1] * v[1][2] * v[2][3] * v[3][0]
            - v[0][3] * v[1][2] * v[2][0] * v[3][1]
            + v[0][2] * v[1][3] * v[2][0] * v[3][1]
            + v[0][3] * v[1][0] * v[2][2] * v[3][1]
            - v[0][0] * v[1][3] * v[2][2] * v[3][1]
            - v[0][2] * v[1][0] * v[2][3] * v[3][1]
            + v[0][0] * v[1][2] * v[2][3] * v[3][1]
            + v[0][3] * v[1][1] * v[2][0] * v[3][2]
            - v[0][1] * v[1][3] * v[2][0] * v[3][2]
            - v[0][3] * v[1][0] * v[2][1] * v[3][2]
            + v[0][0] * v[1][3] * v[2][1] * v[3][2]
            + v[0][1] * v[1][0] * v[2][3] * v[3][2]
            - v[0][0] * v[1][1] * v[2][3] * v[3][2]
            - v[0][2] * v[1][1] * v[2][0] * v[3][3]
            + v[0][1] * v[1][2] * v[2][0] * v[3][3]
            + v[0][2] * v[1][0] * v[2][1] * v[3][3]
            - v[0][0] * v[1][2] * v[2][1] * v[3][3]
            - v[0][1] * v[1][0] * v[2][2] * v[3][3]
            + v[0][0] * v[1][1] * v[2][2] * v[3][3]
    }
}

impl<T: Real> SquareMatrix<T, 4> {
    /// Inverse by Gauss-Jordan elimination.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is within
    /// tolerance of zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if approx_eq(det, T::zero()) {
            return Err(singular(det).into());
        }
        gauss_jordan(self.rows)
            .map(|rows| Self { rows })
            .ok_or_else(|| singular(det).into())
    }
}

/// Reduces `rows` to the identity with row operations, applying the same
/// operations to an identity matrix, which ends up holding the inverse.
///
/// Each column is pivoted on its largest-magnitude entry at or below the
/// diagonal. Returns `None` if a column has no non-zero candidate.
fn gauss_jordan<T: Real, const N: usize>(mut rows: [[T; N]; N]) -> Option<[[T; N]; N]> {
    let mut inv = SquareMatrix::<T, N>::identity().rows;
    for j in 0..N {
        let pivot = (j..N).fold(j, |best, r| {
            if rows[r][j].abs() > rows[best][j].abs() {
                r
            } else {
                best
            }
        });
        if rows[pivot][j] == T::zero() {
            return None;
        }
        if pivot != j {
            trace!(row = j, swapped_with = pivot, "pivot swap");
            rows.swap(j, pivot);
            inv.swap(j, pivot);
        }

        let d = rows[j][j];
        for c in 0..N {
            rows[j][c] /= d;
            inv[j][c] /= d;
        }

        let pivot_row = rows[j];
        let pivot_inv = inv[j];
        for r in (0..N).filter(|&r| r != j) {
            let mult = rows[r][j];
            for c in 0..N {
                rows[r][c] -= mult * pivot_row[c];
                inv[r][c] -= mult * pivot_inv[c];
            }
        }
    }
    Some(inv)
}

impl<T: Scalar, const N: usize> Default for SquareMatrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> PartialEq for SquareMatrix<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(&a, &b)| a.tol_eq(b))
    }
}

macro_rules! impl_portable_mul {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> Mul for SquareMatrix<T, $n> {
                type Output = Self;

                fn mul(self, rhs: Self) -> Self {
                    self.mul_portable(&rhs)
                }
            }
        )*
    };
}

impl_portable_mul!(2, 3);

impl<T: Scalar> Mul for SquareMatrix<T, 4> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            rows: T::mul_matrix4(&self.rows, &rhs.rows),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for SquareMatrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
        self.dot(&v)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        self.map(|e| e * s)
    }
}

/// # Panics
///
/// Panics if `s` is within tolerance of zero; use [`SquareMatrix::try_div`]
/// to handle that case.
impl<T: Scalar, const N: usize> Div<T> for SquareMatrix<T, N> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        match self.try_div(s) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Row access: `m[i][j]` is the element at row `i`, column `j`.
///
/// # Panics
///
/// Panics if `i >= N`.
impl<T: Scalar, const N: usize> Index<usize> for SquareMatrix<T, N> {
    type Output = [T; N];

    fn index(&self, i: usize) -> &[T; N] {
        match self.rows.get(i) {
            Some(r) => r,
            None => panic!("{}", MathError::IndexOutOfBounds { index: i, len: N }),
        }
    }
}

/// # Panics
///
/// Panics if `i >= N`.
impl<T: Scalar, const N: usize> IndexMut<usize> for SquareMatrix<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut [T; N] {
        match self.rows.get_mut(i) {
            Some(r) => r,
            None => panic!("{}", MathError::IndexOutOfBounds { index: i, len: N }),
        }
    }
}

impl<T: Scalar, const N: usize> fmt::Display for SquareMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, r) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "{}", Vector::from_array(*r))?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> AbsDiffEq for SquareMatrix<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for SquareMatrix<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurvelisError;
    use crate::math::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sample4() -> Matrix4<f64> {
        Matrix4::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 1.0, 0.0, 2.0],
            [0.0, 4.0, 1.0, 1.0],
            [3.0, 0.0, 2.0, 1.0],
        ])
    }

    #[test]
    fn default_is_identity() {
        let m = Matrix3::<f64>::default();
        assert_eq!(m, Matrix3::from_diagonal(Vector3::splat(1.0)));
        assert_eq!(m.dot(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn column_constructor_transposes_rows() {
        let m = Matrix2::from_col_vectors([Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]);
        assert_eq!(m.row(0).unwrap(), Vector2::new(1.0, 3.0));
        assert_eq!(m.col(1).unwrap(), Vector2::new(3.0, 4.0));
        assert_eq!(m.transpose(), Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn row_and_col_are_bounds_checked() {
        let m = Matrix3::<f64>::identity();
        assert!(matches!(
            m.row(3).unwrap_err(),
            CurvelisError::Math(MathError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(m.col(7).is_err());
        assert!(m.get(1, 3).is_err());
        assert_abs_diff_eq!(m.get(1, 1).unwrap(), 1.0);
    }

    #[test]
    fn determinants() {
        assert_abs_diff_eq!(Matrix2::from_rows([[3.0, 8.0], [4.0, 6.0]]).determinant(), -14.0);
        let m3 = Matrix3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_abs_diff_eq!(m3.determinant(), -306.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sample4().determinant(), -20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            Matrix4::from_diagonal(Vector4::new(1.0, 2.0, 3.0, 4.0)).determinant(),
            24.0
        );
    }

    #[test]
    fn integer_determinant() {
        let m = Matrix2::from_rows([[2, 1], [7, 4]]);
        assert_eq!(m.determinant(), 1);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.dot(&Vector2::new(1.0, 1.0)), Vector2::new(3.0, 7.0));
        assert_eq!(m * Vector2::new(0.0, 1.0), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn matrix_product() {
        let a = Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix2::from_rows([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a * b, Matrix2::from_rows([[19.0, 22.0], [43.0, 50.0]]));
        let m = sample4();
        assert_eq!(m * Matrix4::identity(), m);
        assert_eq!(Matrix4::identity() * m, m);
    }

    #[test]
    fn f32_product_matches_portable_path() {
        let a = sample4().cast::<f32>().unwrap();
        let b = a.transpose();
        assert_abs_diff_eq!(a * b, a.mul_portable(&b), epsilon = 1e-4);
    }

    #[test]
    fn scalar_mul_and_div() {
        let m = Matrix2::from_rows([[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(m * 0.5, Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m / 2.0, m * 0.5);
        assert!(m.try_div(0.0).is_err());
    }

    #[test]
    fn inverse_of_diagonal() {
        let m = Matrix4::from_diagonal(Vector4::splat(2.0));
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix4::from_diagonal(Vector4::splat(0.5)));
    }

    #[test]
    fn inverse_round_trip_4x4() {
        let m = sample4();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv * m, Matrix4::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv.inverse().unwrap(), m, epsilon = 1e-9);
    }

    #[test]
    fn inverse_with_zero_leading_pivot() {
        // Leading pivot is zero, so the first row must be swapped.
        let m = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 3.0, 0.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn inverse_with_mixed_scales() {
        // Column 0 lies entirely within the comparison epsilon, yet the
        // determinant is 1e8.
        let m = Matrix4::from_diagonal(Vector4::new(1e-10, 1e6, 1e6, 1e6));
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv.get(0, 0).unwrap(), 1e10, epsilon = 1.0);
        assert_abs_diff_eq!(inv.get(3, 3).unwrap(), 1e-6, epsilon = 1e-18);

        let swapped = Matrix4::from_rows([
            [0.0, 1e6, 0.0, 0.0],
            [1e-10, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1e6, 0.0],
            [0.0, 0.0, 0.0, 1e6],
        ]);
        let inv = swapped.inverse().unwrap();
        assert_abs_diff_eq!(swapped * inv, Matrix4::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv * swapped, Matrix4::identity(), epsilon = 1e-9);
    }

    #[test]
    fn pivots_on_largest_entry() {
        // A small but usable leading pivot; elimination must not amplify it.
        let m = Matrix4::from_rows([
            [1e-12, 1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-9);
    }

    #[test]
    fn singular_matrix_is_an_error() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        assert!(matches!(
            m.inverse().unwrap_err(),
            CurvelisError::Math(MathError::SingularMatrix { .. })
        ));
        assert!(Matrix2::from_rows([[1.0, 2.0], [2.0, 4.0]]).inverse().is_err());
        assert!(Matrix3::<f64>::zeros().inverse().is_err());
    }

    #[test]
    fn small_inverses_round_trip() {
        let m2 = Matrix2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_abs_diff_eq!(m2 * m2.inverse().unwrap(), Matrix2::identity(), epsilon = 1e-12);

        let m3 = Matrix3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv3 = m3.inverse().unwrap();
        assert_abs_diff_eq!(m3 * inv3, Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            inv3,
            Matrix3::from_rows([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_turns_x_into_y() {
        let r = Matrix2::rotation(FRAC_PI_2);
        assert_eq!(r.dot(&Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0));
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.inverse().unwrap(), r.transpose(), epsilon = 1e-12);
    }

    #[test]
    fn element_type_conversion() {
        let m = Matrix2::from_rows([[1, 2], [3, 4]]).cast::<f64>().unwrap();
        assert_abs_diff_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn indexing_reads_rows() {
        let mut m = Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_abs_diff_eq!(m[1][0], 3.0);
        m[0][1] = 5.0;
        assert_abs_diff_eq!(m.get(0, 1).unwrap(), 5.0);
    }

    #[test]
    fn display_format() {
        let m = Matrix2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[[ 1 2 ]\n [ 3 4 ]]");
    }
}
