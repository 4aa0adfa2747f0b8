//! 3D vector type used for particle and body state.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// 3D vector. `x` runs along the cloth width, `y` is up, `z` is depth.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Vector with all components set to the same value.
    pub fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length_sq(self) -> F { self.dot(self) }

    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Unit vector, or zero when the length is exactly zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    pub fn distance(self, other: Self) -> F { (self - other).length() }

    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Component by axis number: 0 = x, 1 = y, 2 = z.
    ///
    /// # Panics
    /// If `axis > 2`.
    pub fn axis(self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }

    /// Overwrite one component. Same axis numbering as [`Vec3::axis`].
    pub fn set_axis(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> From<[F; 3]> for Vec3<F> {
    fn from(v: [F; 3]) -> Self { Vec3::new(v[0], v[1], v[2]) }
}

impl<F: Float> From<Vec3<F>> for [F; 3] {
    fn from(v: Vec3<F>) -> Self { [v.x, v.y, v.z] }
}
