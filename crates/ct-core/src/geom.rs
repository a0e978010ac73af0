//! Planar geometry for node placement and layout.
//!
//! Coordinates are plain `f64` screen-space units.  The engine never renders
//! anything; it only needs positions that a renderer can scale into pixels.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::{CtError, CtResult};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The drawing rectangle `[0, width] × [0, height]`.
///
/// Nodes are kept `padding` units away from every edge so they never sit
/// flush against the border of the visualisation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:   f64,
    pub height:  f64,
    pub padding: f64,
}

impl Bounds {
    pub const DEFAULT_PADDING: f64 = 30.0;

    /// A rectangle with the default padding.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: Self::DEFAULT_PADDING }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Reject rectangles that leave no room inside the padding.
    pub fn validate(&self) -> CtResult<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.padding.is_finite();
        if !finite || self.padding < 0.0 {
            return Err(CtError::Bounds(format!(
                "non-finite or negative dimensions: {}x{} padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(CtError::Bounds(format!(
                "{}x{} leaves no interior inside padding {}",
                self.width, self.height, self.padding
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Length of the rectangle's diagonal, the largest possible node distance.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Clamp `p` into the padded interior.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.padding, self.width - self.padding),
            p.y.clamp(self.padding, self.height - self.padding),
        )
    }

    /// `true` if `p` lies inside the padded interior (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (self.padding..=self.width - self.padding).contains(&p.x)
            && (self.padding..=self.height - self.padding).contains(&p.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(800.0, 600.0)
    }
}
