//! Semantic wrappers over [`Vector`]: positions and surface normals.
//!
//! Both share the vector representation but are distinct types, so a
//! position cannot be passed where a direction is expected without an
//! explicit conversion.
//!
//! ```compile_fail
//! use curvelis::math::{Point2, Vector2};
//!
//! // A position is not a direction; convert with `to_vector` first.
//! let _ = Vector2::new(1.0, 0.0).dot(&Point2::new(3.0, 4.0));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar::{Real, Scalar};
use super::tolerance::Lerp;
use super::vector::Vector;

macro_rules! semantic_vector {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name<T: Scalar, const N: usize>(Vector<T, N>);

        impl<T: Scalar, const N: usize> $name<T, N> {
            /// Wraps a vector.
            #[must_use]
            pub const fn from_vector(v: Vector<T, N>) -> Self {
                Self(v)
            }

            /// Creates one from its components.
            #[must_use]
            pub const fn from_array(components: [T; N]) -> Self {
                Self(Vector::from_array(components))
            }

            /// Returns the underlying vector.
            #[must_use]
            pub fn to_vector(self) -> Vector<T, N> {
                self.0
            }

            /// Returns the components as an array.
            #[must_use]
            pub fn to_array(self) -> [T; N] {
                self.0.to_array()
            }

            /// Borrows the components as an array.
            #[must_use]
            pub fn as_array(&self) -> &[T; N] {
                self.0.as_array()
            }
        }

        impl<T: Real, const N: usize> $name<T, N> {
            /// Returns `true` if no component is NaN or infinite.
            #[must_use]
            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }
        }

        impl<T: Scalar> $name<T, 2> {
            /// Creates one from `x` and `y`.
            #[must_use]
            pub const fn new(x: T, y: T) -> Self {
                Self(Vector::<T, 2>::new(x, y))
            }

            /// Returns the x component.
            #[must_use]
            pub fn x(&self) -> T {
                self.0.x()
            }

            /// Returns the y component.
            #[must_use]
            pub fn y(&self) -> T {
                self.0.y()
            }
        }

        impl<T: Scalar> $name<T, 3> {
            /// Creates one from `x`, `y` and `z`.
            #[must_use]
            pub const fn new(x: T, y: T, z: T) -> Self {
                Self(Vector::<T, 3>::new(x, y, z))
            }

            /// Returns the x component.
            #[must_use]
            pub fn x(&self) -> T {
                self.0.x()
            }

            /// Returns the y component.
            #[must_use]
            pub fn y(&self) -> T {
                self.0.y()
            }

            /// Returns the z component.
            #[must_use]
            pub fn z(&self) -> T {
                self.0.z()
            }
        }

        impl<T: Scalar> $name<T, 4> {
            /// Creates one from `x`, `y`, `z` and `w`.
            #[must_use]
            pub const fn new(x: T, y: T, z: T, w: T) -> Self {
                Self(Vector::<T, 4>::new(x, y, z, w))
            }

            /// Returns the x component.
            #[must_use]
            pub fn x(&self) -> T {
                self.0.x()
            }

            /// Returns the y component.
            #[must_use]
            pub fn y(&self) -> T {
                self.0.y()
            }

            /// Returns the z component.
            #[must_use]
            pub fn z(&self) -> T {
                self.0.z()
            }

            /// Returns the w component.
            #[must_use]
            pub fn w(&self) -> T {
                self.0.w()
            }
        }

        impl<T: Scalar, const N: usize> Default for $name<T, N> {
            fn default() -> Self {
                Self(Vector::zeros())
            }
        }

        impl<T: Scalar, const N: usize> From<Vector<T, N>> for $name<T, N> {
            fn from(v: Vector<T, N>) -> Self {
                Self(v)
            }
        }

        impl<T: Scalar, const N: usize> From<$name<T, N>> for Vector<T, N> {
            fn from(v: $name<T, N>) -> Self {
                v.0
            }
        }

        impl<T: Scalar, const N: usize> From<[T; N]> for $name<T, N> {
            fn from(components: [T; N]) -> Self {
                Self::from_array(components)
            }
        }

        impl<T: Scalar, const N: usize> Mul<T> for $name<T, N> {
            type Output = Self;

            fn mul(self, s: T) -> Self {
                Self(self.0 * s)
            }
        }

        impl<T: Scalar, const N: usize> fmt::Display for $name<T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl<T, const N: usize> AbsDiffEq for $name<T, N>
        where
            T: Scalar + AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<T, const N: usize> RelativeEq for $name<T, N>
        where
            T: Scalar + RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

semantic_vector!(
    /// A position in `N`-dimensional affine space.
    Point
);

semantic_vector!(
    /// A surface normal or orientation direction.
    ///
    /// Negation is plain vector negation; no transform-aware behavior is
    /// attached.
    Normal
);

/// Displacement between two positions.
impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Vector<T, N> {
        self.0 - rhs.0
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self {
        Self(self.0 + rhs)
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self {
        Self(self.0 - rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign<Vector<T, N>> for Point<T, N> {
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.0 += rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign<Vector<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.0 -= rhs;
    }
}

impl<T: Real, const N: usize> Point<T, N> {
    /// The origin.
    #[must_use]
    pub fn origin() -> Self {
        Self(Vector::zeros())
    }

    /// Midpoint of `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        let half = T::one() / (T::one() + T::one());
        Self((self.0 + other.0) * half)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> T {
        (self - other).size()
    }
}

impl<T: Real, const N: usize> Lerp<T> for Point<T, N> {
    fn lerp(t: T, a: Self, b: Self) -> Self {
        Self(Vector::lerp(t, a.0, b.0))
    }
}

impl<T: Scalar, const N: usize> Neg for Normal<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Real, const N: usize> Normal<T, N> {
    /// Builds a unit normal from any non-zero direction.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLengthNormalization`](crate::error::MathError::ZeroLengthNormalization)
    /// if `direction` is within tolerance of zero.
    pub fn try_from_direction(direction: Vector<T, N>) -> crate::error::Result<Self> {
        Ok(Self(direction.normalized()?))
    }
}
