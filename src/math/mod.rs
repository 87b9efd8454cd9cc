//! Fixed-size linear algebra: element traits, tolerance, vectors, points,
//! normals and square matrices.

mod interop;
pub mod matrix;
pub mod point;
pub mod scalar;
#[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "sse"))]
mod simd;
pub mod tolerance;
pub mod vector;

pub use matrix::SquareMatrix;
pub use point::{Normal, Point};
pub use scalar::{Real, Scalar};
pub use tolerance::{lerp, Lerp, Tolerance};
pub use vector::Vector;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
pub type Point4<T> = Point<T, 4>;

pub type Normal2<T> = Normal<T, 2>;
pub type Normal3<T> = Normal<T, 3>;
pub type Normal4<T> = Normal<T, 4>;

pub type Matrix2<T> = SquareMatrix<T, 2>;
pub type Matrix3<T> = SquareMatrix<T, 3>;
pub type Matrix4<T> = SquareMatrix<T, 4>;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2i = Vector2<i32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4i = Vector4<i32>;

pub type Point2f = Point2<f32>;
pub type Point3f = Point3<f32>;
pub type Point2i = Point2<i32>;
pub type Point3i = Point3<i32>;

pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;
