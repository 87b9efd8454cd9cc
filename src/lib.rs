//! Small geometry kernel: fixed-size vectors and matrices, Bezier and SVG
//! elliptical arc evaluation, and path flattening.

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{CurvelisError, Result};
