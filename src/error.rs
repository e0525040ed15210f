use glam::Vec2;

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum Error {
    #[error("A scene needs at least one shape")]
    EmptyScene,

    #[error("Circle radius must be non-negative, got {0}")]
    NegativeRadius(f32),

    #[error("Rectangle min {min} is not below max {max} on every axis")]
    InvertedRect { min: Vec2, max: Vec2 },

    #[error("Shape parameters must be finite")]
    NonFiniteShape,

    #[error("Ray origin and direction must be finite")]
    NonFiniteRay,

    #[error("Ray direction has zero length")]
    ZeroDirection,

    #[error("Invalid march options: {0}")]
    BadOptions(&'static str),

    #[error("NaN encountered in distance field")]
    EvaluatedToNaN,
}
