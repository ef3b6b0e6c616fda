use rustc_hash::FxHashSet;

use crate::error::GeometryQueryError;
use crate::geometry::{OrientedBox, Ray};
use crate::math::intersect_3d::line_box_intersect;
use crate::model::{BarrierClass, BarrierKey, RayHit};
use crate::query::{SearchContext, SpatialQuery};

/// One barrier body in a [`BarrierScene`].
#[derive(Debug, Clone)]
pub struct SceneBarrier {
    pub key: BarrierKey,
    pub class: BarrierClass,
    pub body: OrientedBox,
}

/// A flat list of barrier bodies searched by ray casting.
///
/// Each body a ray passes through yields two hits, one where the ray
/// enters and one where it leaves, both tagged with the same key. A ray
/// starting inside a body yields only the exit hit.
#[derive(Debug, Clone, Default)]
pub struct BarrierScene {
    barriers: Vec<SceneBarrier>,
    indexed_views: Option<FxHashSet<String>>,
}

impl BarrierScene {
    /// Creates an empty scene searchable from any view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a barrier body.
    pub fn add(&mut self, key: BarrierKey, class: BarrierClass, body: OrientedBox) {
        self.barriers.push(SceneBarrier { key, class, body });
    }

    /// Restricts searches to the named views; other views have no index.
    #[must_use]
    pub fn indexed_for<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexed_views = Some(views.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the barriers in insertion order.
    #[must_use]
    pub fn barriers(&self) -> &[SceneBarrier] {
        &self.barriers
    }
}

impl SpatialQuery for BarrierScene {
    fn cast(
        &self,
        ray: &Ray,
        filter: BarrierClass,
        context: &SearchContext,
    ) -> Result<Vec<RayHit>, GeometryQueryError> {
        if let Some(views) = &self.indexed_views {
            if !views.contains(&context.name) {
                return Err(GeometryQueryError::NoSpatialIndex(context.name.clone()));
            }
        }

        let mut hits = Vec::new();
        for barrier in self.barriers.iter().filter(|b| b.class == filter) {
            let Some(span) = line_box_intersect(ray.origin(), ray.direction(), &barrier.body) else {
                continue;
            };
            for t in [span.t_enter, span.t_exit] {
                if ray.reaches(t) && context.is_visible(&ray.point_at(t)) {
                    hits.push(RayHit::new(t, barrier.key));
                }
            }
        }
        Ok(hits)
    }
}
