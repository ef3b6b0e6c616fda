use tracing::trace;

use crate::error::GeometryQueryError;
use crate::geometry::{LineSegment, Ray};
use crate::math::{Point3, Vector3};
use crate::model::{BarrierClass, RayHit};

use super::{SearchContext, SpatialQuery};

/// Casts rays against one class of barriers within a search context.
///
/// A thin adapter over a [`SpatialQuery`]: it validates the ray and the
/// context, then forwards the search. Returned hits are unordered.
#[derive(Clone, Copy)]
pub struct RayCaster<'a> {
    query: &'a dyn SpatialQuery,
    filter: BarrierClass,
    context: &'a SearchContext,
}

impl<'a> RayCaster<'a> {
    /// Creates a new `RayCaster`.
    #[must_use]
    pub fn new(query: &'a dyn SpatialQuery, filter: BarrierClass, context: &'a SearchContext) -> Self {
        Self {
            query,
            filter,
            context,
        }
    }

    /// Casts an unbounded ray from `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError::ZeroDirection`] for a zero direction,
    /// or any error of the context or the underlying query.
    pub fn cast(&self, origin: Point3, direction: Vector3) -> Result<Vec<RayHit>, GeometryQueryError> {
        let ray = Ray::new(origin, direction)?;
        self.cast_ray(&ray)
    }

    /// Casts a ray covering the run of `segment`.
    ///
    /// # Errors
    ///
    /// Returns any error of the context or the underlying query.
    pub fn cast_along(&self, segment: &LineSegment) -> Result<Vec<RayHit>, GeometryQueryError> {
        self.cast_ray(&Ray::along(segment))
    }

    /// Casts a prepared ray.
    ///
    /// # Errors
    ///
    /// Returns any error of the context or the underlying query.
    pub fn cast_ray(&self, ray: &Ray) -> Result<Vec<RayHit>, GeometryQueryError> {
        self.context.validate()?;
        let hits = self.query.cast(ray, self.filter, self.context)?;
        trace!(
            context = %self.context.name,
            filter = ?self.filter,
            hits = hits.len(),
            "ray cast"
        );
        Ok(hits)
    }
}

impl std::fmt::Debug for RayCaster<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayCaster")
            .field("filter", &self.filter)
            .field("context", &self.context.name)
            .finish_non_exhaustive()
    }
}
