use glam::Vec2;

use crate::Error;

/// A ray with an origin and a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2 {
    pub origin: Vec2,
    /// Always normalized.
    pub dir: Vec2,
}

impl Ray2 {
    /// `dir` does not need to be normalized, but must have a non-zero length.
    pub fn new(origin: Vec2, dir: Vec2) -> Result<Self, Error> {
        if !origin.is_finite() || !dir.is_finite() {
            return Err(Error::NonFiniteRay);
        }
        let dir = dir.try_normalize().ok_or(Error::ZeroDirection)?;
        Ok(Self { origin, dir })
    }

    /// Ray leaving `origin` at `radians` counter-clockwise from the positive X axis.
    pub fn from_angle(origin: Vec2, radians: f32) -> Result<Self, Error> {
        if !radians.is_finite() {
            return Err(Error::NonFiniteRay);
        }
        let (sin, cos) = radians.sin_cos();
        Self::new(origin, Vec2::new(cos, sin))
    }

    /// Ray from `origin` aimed at `target`, e.g. the pointer position.
    pub fn towards(origin: Vec2, target: Vec2) -> Result<Self, Error> {
        if !origin.is_finite() || !target.is_finite() {
            return Err(Error::NonFiniteRay);
        }
        let delta = target - origin;
        if delta == Vec2::ZERO {
            return Err(Error::ZeroDirection);
        }
        Self::from_angle(origin, delta.y.atan2(delta.x))
    }

    #[inline]
    pub fn point_along(&self, t: f32) -> Vec2 {
        self.origin + t * self.dir
    }
}
