use glam::Vec2;

use crate::BoundingBox;
use crate::Error;
use crate::Ray2;

/// Default hit threshold, in scene units.
pub const MIN_RAY_DIST: f32 = 0.001;

/// Default travel budget: the diagonal of a 1920x1080 screen.
pub const MAX_RAY_DIST: f32 = 2203.0;

/// Upper bound on the number of steps a march with these thresholds needs.
///
/// Saturates at `usize::MAX` for extreme ratios.
pub fn max_steps_for(min_ray_dist: f32, max_ray_dist: f32) -> usize {
    let ratio = (f64::from(max_ray_dist) / f64::from(min_ray_dist)).ceil();
    (ratio as usize).saturating_add(1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// A field value below this counts as a hit.
    pub min_ray_dist: f32,

    /// A field value above this means nothing is left to hit in any direction.
    pub max_ray_dist: f32,

    /// Don't take more steps than this
    pub max_steps: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_ray_dist: MIN_RAY_DIST,
            max_ray_dist: MAX_RAY_DIST,
            max_steps: max_steps_for(MIN_RAY_DIST, MAX_RAY_DIST),
        }
    }
}

impl Options {
    /// Thresholds with the matching step cap.
    pub fn new(min_ray_dist: f32, max_ray_dist: f32) -> Result<Self, Error> {
        let opt = Self {
            min_ray_dist,
            max_ray_dist,
            max_steps: 1,
        };
        opt.validate()?;
        Ok(Self {
            max_steps: max_steps_for(min_ray_dist, max_ray_dist),
            ..opt
        })
    }

    /// Default hit threshold, travel budget set to the diagonal of `viewport`.
    pub fn for_viewport(viewport: &BoundingBox) -> Result<Self, Error> {
        Self::new(MIN_RAY_DIST, viewport.diagonal())
    }

    #[must_use]
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.min_ray_dist.is_finite() && self.min_ray_dist > 0.0) {
            return Err(Error::BadOptions("min_ray_dist must be positive and finite"));
        }
        if !(self.max_ray_dist.is_finite() && self.max_ray_dist > self.min_ray_dist) {
            return Err(Error::BadOptions(
                "max_ray_dist must be finite and larger than min_ray_dist",
            ));
        }
        if self.max_steps == 0 {
            return Err(Error::BadOptions("max_steps must be at least 1"));
        }
        Ok(())
    }
}

/// Why a march stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Got within `min_ray_dist` of a surface.
    Hit,

    /// The nearest surface was further away than `max_ray_dist`.
    Escaped,

    /// Ran out of steps before either of the above.
    StepLimit,
}

/// One evaluation of the field during a march, handed to observers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarchStep {
    pub index: usize,
    /// Where the field was evaluated.
    pub pos: Vec2,
    /// Field value at `pos`: nothing is closer than this.
    pub dist: f32,
    /// Distance travelled before this step.
    pub t: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarchResult {
    pub termination: Termination,
    /// Distance travelled along the ray.
    pub t: f32,
    /// Where the march stopped.
    pub pos: Vec2,
    /// Number of field evaluations.
    pub steps: usize,
    /// Smallest field value seen along the way.
    pub closest: f32,
}

impl MarchResult {
    /// Distance reported for a miss, never a valid travel distance.
    pub const MISS_DISTANCE: f32 = -1.0;

    pub fn is_hit(&self) -> bool {
        self.termination == Termination::Hit
    }

    /// Travel distance to the hit, `None` on a miss.
    pub fn distance(&self) -> Option<f32> {
        self.is_hit().then_some(self.t)
    }

    /// `(hit, distance)`, with [`Self::MISS_DISTANCE`] as distance on a miss.
    pub fn as_tuple(&self) -> (bool, f32) {
        (self.is_hit(), self.distance().unwrap_or(Self::MISS_DISTANCE))
    }
}

/// Marches `ray` through the distance field `sd` until it hits a surface,
/// escapes past `max_ray_dist`, or runs out of steps.
///
/// `sd` must never overestimate the distance to the closest surface, or the
/// march can step over thin geometry.
pub fn trace(
    sd: impl FnMut(Vec2) -> f32,
    ray: Ray2,
    opt: &Options,
) -> Result<MarchResult, Error> {
    trace_observed(sd, ray, opt, |_| {})
}

/// Same as [`trace`], calling `observer` with every step before acting on it.
pub fn trace_observed(
    mut sd: impl FnMut(Vec2) -> f32,
    ray: Ray2,
    opt: &Options,
    mut observer: impl FnMut(&MarchStep),
) -> Result<MarchResult, Error> {
    opt.validate()?;
    if !ray.origin.is_finite() || !ray.dir.is_finite() {
        return Err(Error::NonFiniteRay);
    }
    let dir = ray.dir.try_normalize().ok_or(Error::ZeroDirection)?;

    let mut pos = ray.origin;
    let mut t = 0.0;
    let mut closest = f32::INFINITY;

    for index in 0..opt.max_steps {
        let dist = sd(pos);
        if dist.is_nan() {
            return Err(Error::EvaluatedToNaN);
        }
        observer(&MarchStep { index, pos, dist, t });
        closest = closest.min(dist);

        let termination = if dist < opt.min_ray_dist {
            Some(Termination::Hit)
        } else if dist > opt.max_ray_dist {
            Some(Termination::Escaped)
        } else {
            None
        };

        if let Some(termination) = termination {
            log::trace!(
                "March from {} ended: {:?} after {} steps, t = {}",
                ray.origin,
                termination,
                index + 1,
                t
            );
            return Ok(MarchResult {
                termination,
                t,
                pos,
                steps: index + 1,
                closest,
            });
        }

        pos += dir * dist;
        t += dist;
    }

    log::warn!(
        "March from {} aborted after {} steps, t = {}",
        ray.origin,
        opt.max_steps,
        t
    );
    Ok(MarchResult {
        termination: Termination::StepLimit,
        t,
        pos,
        steps: opt.max_steps,
        closest,
    })
}
