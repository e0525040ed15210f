//! 2D signed distance field scenes and sphere tracing.
//!
//! A [`Scene`] is a non-empty set of [`Shape`]s. Ask it how far any point is
//! from the nearest surface with [`Scene::min_distance`], or march a ray
//! through it with [`march`] to find where (if anywhere) the ray hits.

#![forbid(unsafe_code)]

pub use glam;
pub use sphere_march_sdf::*;

mod error;
pub use error::*;

mod shape;
pub use shape::*;

mod scene;
pub use scene::*;

mod grid2;
pub use grid2::*;

pub mod sphere_tracing;

mod trace;
pub use trace::*;

mod math;
pub use math::*;
