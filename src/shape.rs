use glam::Vec2;
use sphere_march_sdf::sd_circle;
use sphere_march_sdf::sd_rect;

use crate::BoundingBox;
use crate::Error;

/// A primitive that knows its distance to any point in the plane.
///
/// Build these through [`Shape::circle`] and [`Shape::rect`], which reject
/// degenerate parameters so no NaN or negative distances reach the tracer.
///
/// Only distances measured from outside (or on) a shape are tight. Inside a
/// circle the value goes negative, inside a rectangle it is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
    },

    /// Axis aligned, `min <= max` on both axes.
    Rect {
        min: Vec2,
        max: Vec2,
    },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Result<Self, Error> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(Error::NonFiniteShape);
        }
        if radius < 0.0 {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Self::Circle { center, radius })
    }

    pub fn rect(min: Vec2, max: Vec2) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::NonFiniteShape);
        }
        if min.cmpgt(max).any() {
            return Err(Error::InvertedRect { min, max });
        }
        Ok(Self::Rect { min, max })
    }

    /// A rectangle spanned by two opposite corners given in any order.
    pub fn rect_from_corners(a: Vec2, b: Vec2) -> Result<Self, Error> {
        Self::rect(a.min(b), a.max(b))
    }

    /// Checks the invariants the constructors enforce.
    ///
    /// Needed for shapes that were built as enum literals or deserialized.
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Self::Circle { center, radius } => Self::circle(center, radius).map(|_| ()),
            Self::Rect { min, max } => Self::rect(min, max).map(|_| ()),
        }
    }

    #[inline]
    pub fn distance(&self, pos: Vec2) -> f32 {
        match *self {
            Self::Circle { center, radius } => sd_circle(pos, center, radius),
            Self::Rect { min, max } => sd_rect(pos, min, max),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            Self::Circle { center, radius } => {
                BoundingBox::from_center_size(center, Vec2::splat(2.0 * radius))
            }
            Self::Rect { min, max } => BoundingBox::from_min_max(min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_distance_matches_formula() {
        let center = Vec2::new(1000.0, 1000.0);
        let circle = Shape::circle(center, 40.0).unwrap();
        for pos in [
            Vec2::new(0.0, 1000.0),
            Vec2::new(960.0, 540.0),
            Vec2::new(1040.0, 1000.0),
            Vec2::new(-250.0, 3.5),
        ] {
            let expected = (pos - center).length() - 40.0;
            assert!((circle.distance(pos) - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn rect_distance() {
        let rect = Shape::rect(Vec2::ZERO, Vec2::splat(10.0)).unwrap();
        assert_eq!(rect.distance(Vec2::new(5.0, 5.0)), 0.0);
        assert!((rect.distance(Vec2::new(15.0, 5.0)) - 5.0).abs() < 1e-6);
        assert!((rect.distance(Vec2::new(15.0, 15.0)) - 7.071_068).abs() < 1e-5);
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert_eq!(
            Shape::circle(Vec2::ZERO, -1.0),
            Err(Error::NegativeRadius(-1.0))
        );
        assert_eq!(
            Shape::circle(Vec2::new(f32::NAN, 0.0), 1.0),
            Err(Error::NonFiniteShape)
        );
        assert_eq!(
            Shape::circle(Vec2::ZERO, f32::INFINITY),
            Err(Error::NonFiniteShape)
        );
        assert_eq!(
            Shape::rect(Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)),
            Err(Error::InvertedRect {
                min: Vec2::new(10.0, 0.0),
                max: Vec2::new(0.0, 10.0),
            })
        );
    }

    #[test]
    fn zero_sized_shapes_are_allowed() {
        assert!(Shape::circle(Vec2::ONE, 0.0).is_ok());
        assert!(Shape::rect(Vec2::ONE, Vec2::ONE).is_ok());
    }

    #[test]
    fn rect_from_corners_normalizes() {
        let rect = Shape::rect_from_corners(Vec2::new(300.0, 20.0), Vec2::new(20.0, 300.0)).unwrap();
        assert_eq!(
            rect,
            Shape::Rect {
                min: Vec2::splat(20.0),
                max: Vec2::splat(300.0),
            }
        );
    }

    #[test]
    fn validate_catches_literals() {
        let bad = Shape::Circle {
            center: Vec2::ZERO,
            radius: -3.0,
        };
        assert_eq!(bad.validate(), Err(Error::NegativeRadius(-3.0)));
        assert!(Shape::Rect {
            min: Vec2::ZERO,
            max: Vec2::ONE
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn bounding_boxes() {
        let circle = Shape::circle(Vec2::new(1000.0, 1000.0), 40.0).unwrap();
        assert_eq!(
            circle.bounding_box(),
            BoundingBox::from_min_max(Vec2::splat(960.0), Vec2::splat(1040.0))
        );
    }
}
