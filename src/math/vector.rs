//! Fixed-size vectors with tolerance-based equality.

use std::array;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::NumCast;

use crate::error::{MathError, Result};

use super::scalar::{Real, Scalar};
use super::tolerance::{clamp, Lerp};

/// Fixed-size vector of `N` elements in `x, y, z, w` order.
///
/// Equality is tolerance-based for float elements: two vectors are equal when
/// every component pair is within the configured epsilon. This relation is
/// not transitive.
#[derive(Debug, Clone, Copy)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn from_array(components: [T; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the components.
    #[must_use]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns component `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if `i >= N`.
    pub fn get(&self, i: usize) -> Result<T> {
        self.0
            .get(i)
            .copied()
            .ok_or_else(|| MathError::IndexOutOfBounds { index: i, len: N }.into())
    }

    /// Overwrites component `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if `i >= N`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let slot = self
            .0
            .get_mut(i)
            .ok_or(MathError::IndexOutOfBounds { index: i, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Applies `f` to every component.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    fn zip_map<F: FnMut(T, T) -> T>(self, rhs: Self, mut f: F) -> Self {
        Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, rhs: &Self) -> T {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn size_sq(&self) -> T {
        self.dot(self)
    }

    /// Sum of the components.
    #[must_use]
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, &c| acc + c)
    }

    /// Returns `true` if every component is zero (within tolerance for floats).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_negligible())
    }

    /// Saturates every component to `[lo, hi]`.
    #[must_use]
    pub fn clamped(self, lo: T, hi: T) -> Self {
        self.map(|c| clamp(c, lo, hi))
    }

    /// Converts every component to another numeric type.
    ///
    /// Returns `None` if a component is not representable in `U`.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Vector<U, N>> {
        let mut out = [U::zero(); N];
        for (dst, &src) in out.iter_mut().zip(self.0.iter()) {
            *dst = <U as NumCast>::from(src)?;
        }
        Some(Vector(out))
    }

    /// Divides every component by `s`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateDivisor`] if `s` is within tolerance of zero.
    pub fn try_div(self, s: T) -> Result<Self> {
        if s.is_negligible() {
            return Err(MathError::DegenerateDivisor.into());
        }
        Ok(self.map(|c| c / s))
    }

    /// Divides component-wise by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateDivisor`] if any component of `rhs` is
    /// within tolerance of zero.
    pub fn try_div_elementwise(self, rhs: Self) -> Result<Self> {
        if rhs.0.iter().any(|c| c.is_negligible()) {
            return Err(MathError::DegenerateDivisor.into());
        }
        Ok(self.zip_map(rhs, |a, b| a / b))
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    #[must_use]
    pub fn size(&self) -> T {
        self.size_sq().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLengthNormalization`] if the norm is within
    /// tolerance of zero.
    pub fn normalized(self) -> Result<Self> {
        let size = self.size();
        if size.is_negligible() {
            return Err(MathError::ZeroLengthNormalization.into());
        }
        Ok(self.map(|c| c / size))
    }

    /// Component-wise reciprocal. Components within tolerance of zero map to
    /// [`Real::reciprocal_sentinel`] instead of infinity.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.map(|c| {
            if c.is_negligible() {
                T::reciprocal_sentinel()
            } else {
                T::one() / c
            }
        })
    }

    /// Returns `true` if no component is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a 2D vector.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Appends a `z` component.
    #[must_use]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], z])
    }

    /// 2D cross product (the `z` of the 3D cross product).
    #[must_use]
    pub fn perp_dot(&self, rhs: &Self) -> T {
        self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a 3D vector.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Cross product.
    #[must_use]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [x, y, z] = self.0;
        let [rx, ry, rz] = rhs.0;
        Self([y * rz - z * ry, rx * z - x * rz, x * ry - y * rx])
    }

    /// Appends a `w` component.
    #[must_use]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }

    /// Drops the `z` component.
    #[must_use]
    pub fn truncate(self) -> Vector<T, 2> {
        Vector([self.0[0], self.0[1]])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a 4D vector.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Returns the w component.
    #[must_use]
    pub fn w(&self) -> T {
        self.0[3]
    }

    /// Drops the `w` component.
    #[must_use]
    pub fn truncate(self) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], self.0[2]])
    }
}

impl<T: Scalar> From<Vector<T, 2>> for Vector<T, 3> {
    fn from(v: Vector<T, 2>) -> Self {
        v.extend(T::zero())
    }
}

impl<T: Scalar> From<Vector<T, 3>> for Vector<T, 4> {
    fn from(v: Vector<T, 3>) -> Self {
        v.extend(T::zero())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&a, &b)| a.tol_eq(b))
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

/// Component-wise product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        self.map(|c| c * s)
    }
}

/// # Panics
///
/// Panics if `s` is within tolerance of zero; use [`Vector::try_div`] to
/// handle that case.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        match self.try_div(s) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if any component of `rhs` is within tolerance of zero; use
/// [`Vector::try_div_elementwise`] to handle that case.
impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.try_div_elementwise(rhs) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, s: T) {
        for a in &mut self.0 {
            *a *= s;
        }
    }
}

/// # Panics
///
/// Panics if `s` is within tolerance of zero.
impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

/// # Panics
///
/// Panics if `i >= N`; use [`Vector::get`] to handle that case.
impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.0.get(i) {
            Some(c) => c,
            None => panic!("{}", MathError::IndexOutOfBounds { index: i, len: N }),
        }
    }
}

/// # Panics
///
/// Panics if `i >= N`; use [`Vector::set`] to handle that case.
impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.0.get_mut(i) {
            Some(c) => c,
            None => panic!("{}", MathError::IndexOutOfBounds { index: i, len: N }),
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, i64, f32, f64);

impl<T: Real, const N: usize> Lerp<T> for Vector<T, N> {
    fn lerp(t: T, a: Self, b: Self) -> Self {
        let s = T::one() - t;
        a.zip_map(b, |x, y| s * x + t * y)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for c in &self.0 {
            write!(f, " {c}")?;
        }
        write!(f, " ]")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
