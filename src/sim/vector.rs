//! Immutable 2D vector used for positions, sizes and velocities

use std::ops::{Add, Mul};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A point or displacement on the tile grid (x to the right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Checked constructor, rejects NaN and infinite components
    pub fn try_new(x: f32, y: f32) -> Result<Self, SimError> {
        Self::new(x, y).validated("vector")
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    /// Both components scaled by `factor`
    #[inline]
    pub fn times(self, factor: f32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn validated(self, what: &'static str) -> Result<Self, SimError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(SimError::NonFinite { what, value: self })
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.times(rhs)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        Vec2::new(v.x, v.y)
    }
}
