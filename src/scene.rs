use glam::Vec2;
use sphere_march_sdf::sd_op_union;

use crate::BoundingBox;
use crate::Error;
use crate::Shape;

/// The closest shape to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// Index into [`Scene::shapes`].
    pub index: usize,
    pub distance: f32,
}

/// A non-empty set of shapes forming one distance field.
///
/// The field value at a point is the distance to the closest shape. Since a
/// scene always holds at least one shape, that minimum is always defined.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "with_serde",
    serde(try_from = "Vec<Shape>", into = "Vec<Shape>")
)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Result<Self, Error> {
        if shapes.is_empty() {
            return Err(Error::EmptyScene);
        }
        for shape in &shapes {
            shape.validate()?;
        }
        log::debug!("Built scene with {} shapes", shapes.len());
        Ok(Self { shapes })
    }

    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Result<Self, Error> {
        Self::new(shapes.into_iter().collect())
    }

    pub fn push(&mut self, shape: Shape) -> Result<(), Error> {
        shape.validate()?;
        self.shapes.push(shape);
        Ok(())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Distance from `pos` to the closest shape surface.
    ///
    /// A circle of this radius around `pos` touches no shape, so it is a safe
    /// sphere tracing step. Ties between shapes don't matter for the value.
    pub fn min_distance(&self, pos: Vec2) -> f32 {
        self.shapes
            .iter()
            .fold(f32::INFINITY, |min, shape| sd_op_union(min, shape.distance(pos)))
    }

    /// Like [`Self::min_distance`], but also tells which shape is closest.
    /// On ties the earlier shape wins.
    pub fn nearest(&self, pos: Vec2) -> Nearest {
        let init = Nearest {
            index: 0,
            distance: f32::INFINITY,
        };
        self.shapes
            .iter()
            .enumerate()
            .fold(init, |nearest, (index, shape)| {
                let distance = shape.distance(pos);
                if distance < nearest.distance {
                    Nearest { index, distance }
                } else {
                    nearest
                }
            })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.shapes
            .iter()
            .fold(BoundingBox::nothing(), |bb, shape| bb.union(shape.bounding_box()))
    }

    #[cfg(feature = "with_bincode")]
    pub fn as_bytes(&self) -> Result<Vec<u8>, std::boxed::Box<bincode::ErrorKind>> {
        bincode::serialize(self)
    }

    /// Goes through the same validation as [`Self::new`].
    #[cfg(feature = "with_bincode")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, std::boxed::Box<bincode::ErrorKind>> {
        bincode::deserialize(bytes)
    }
}

impl TryFrom<Vec<Shape>> for Scene {
    type Error = Error;

    fn try_from(shapes: Vec<Shape>) -> Result<Self, Self::Error> {
        Self::new(shapes)
    }
}

impl From<Scene> for Vec<Shape> {
    fn from(scene: Scene) -> Self {
        scene.shapes
    }
}
