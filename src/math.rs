//! Small 2D geometry types on top of `glam`.

mod bounding_box;
pub use bounding_box::*;

mod ray2;
pub use ray2::*;
