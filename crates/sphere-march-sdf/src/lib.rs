//! 2D signed distance functions.
//!
//! Free functions over `glam::Vec2` so they can be shared between the CPU
//! tracer and `no_std` targets.

#![cfg_attr(target_arch = "spirv", no_std)]

mod sdf;
pub use sdf::*;
