use crate::sphere_tracing::MarchResult;
use crate::sphere_tracing::MarchStep;
use crate::sphere_tracing::Options;
use crate::Error;
use crate::Ray2;
use crate::Scene;
use glam::Vec2;

/// Marches a ray through the scene, returning where it hit or why it didn't.
pub fn march(scene: &Scene, ray: Ray2, opt: &Options) -> Result<MarchResult, Error> {
    crate::sphere_tracing::trace(to_sd_func(scene), ray, opt)
}

/// [`march`] with a callback for every step, e.g. to draw the safe circles.
pub fn march_observed(
    scene: &Scene,
    ray: Ray2,
    opt: &Options,
    observer: impl FnMut(&MarchStep),
) -> Result<MarchResult, Error> {
    crate::sphere_tracing::trace_observed(to_sd_func(scene), ray, opt, observer)
}

/// [`march`] that also returns every step taken.
pub fn march_path(
    scene: &Scene,
    ray: Ray2,
    opt: &Options,
) -> Result<(MarchResult, Vec<MarchStep>), Error> {
    let mut path = Vec::new();
    let res = march_observed(scene, ray, opt, |step| path.push(*step))?;
    Ok((res, path))
}

/// Marches from `origin` along `direction`, which doesn't need to be normalized.
pub fn march_from(
    scene: &Scene,
    origin: Vec2,
    direction: Vec2,
    opt: &Options,
) -> Result<MarchResult, Error> {
    march(scene, Ray2::new(origin, direction)?, opt)
}

/// Marches from `origin` in the direction of `target`.
///
/// `target` only sets the direction; the march can stop before or after it.
pub fn march_towards(
    scene: &Scene,
    origin: Vec2,
    target: Vec2,
    opt: &Options,
) -> Result<MarchResult, Error> {
    march(scene, Ray2::towards(origin, target)?, opt)
}

/// Marches many independent rays against the same scene.
///
/// The results are in the same order as `rays`.
pub fn march_many(
    scene: &Scene,
    rays: &[Ray2],
    opt: &Options,
) -> Vec<Result<MarchResult, Error>> {
    #[cfg(feature = "with_rayon")]
    {
        use rayon::prelude::*;

        rays.par_iter().map(|ray| march(scene, *ray, opt)).collect()
    }

    #[cfg(not(feature = "with_rayon"))]
    {
        rays.iter().map(|ray| march(scene, *ray, opt)).collect()
    }
}

pub fn to_sd_func(scene: &Scene) -> impl Fn(Vec2) -> f32 + '_ {
    move |pos: Vec2| scene.min_distance(pos)
}
