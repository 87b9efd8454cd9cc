//! Conversions to and from `nalgebra` fixed-size types.
//!
//! `nalgebra` stores matrices column-major; these conversions go element by
//! element, so the mathematical matrix is preserved.

use std::array;

use super::matrix::SquareMatrix;
use super::point::Point;
use super::scalar::Scalar;
use super::vector::Vector;

impl<T: Scalar, const N: usize> From<Vector<T, N>> for nalgebra::SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        nalgebra::SVector::from_fn(|i, _| v[i])
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::SVector<T, N>> for Vector<T, N> {
    fn from(v: nalgebra::SVector<T, N>) -> Self {
        Vector::from_array(array::from_fn(|i| v[i]))
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for nalgebra::Point<T, N> {
    fn from(p: Point<T, N>) -> Self {
        nalgebra::Point::from(nalgebra::SVector::from(p.to_vector()))
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::Point<T, N>> for Point<T, N> {
    fn from(p: nalgebra::Point<T, N>) -> Self {
        Point::from_vector(Vector::from(p.coords))
    }
}

impl<T: Scalar, const N: usize> From<SquareMatrix<T, N>> for nalgebra::SMatrix<T, N, N> {
    fn from(m: SquareMatrix<T, N>) -> Self {
        nalgebra::SMatrix::from_fn(|i, j| m[i][j])
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::SMatrix<T, N, N>> for SquareMatrix<T, N> {
    fn from(m: nalgebra::SMatrix<T, N, N>) -> Self {
        SquareMatrix::from_rows(array::from_fn(|i| array::from_fn(|j| m[(i, j)])))
    }
}
