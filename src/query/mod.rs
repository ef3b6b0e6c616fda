mod context;
mod ray_caster;

pub use context::SearchContext;
pub use ray_caster::RayCaster;

use crate::error::{BarrierResolutionError, GeometryQueryError};
use crate::geometry::Ray;
use crate::model::{
    Barrier, BarrierClass, BarrierKey, ElementKind, LinearElement, OpeningSpec, OpeningTemplate,
    RayHit,
};

/// Source of the linear elements to place openings for.
pub trait ElementProvider: Sync {
    /// Returns the title of the model the elements come from.
    fn title(&self) -> &str;

    /// Returns every element of `kind`, in model order.
    fn elements(&self, kind: ElementKind) -> Vec<LinearElement>;
}

/// Read-only ray-vs-barrier search backed by a prebuilt spatial index.
///
/// Implementations must tolerate concurrent queries.
pub trait SpatialQuery: Send + Sync {
    /// Returns every intersection of `ray` with barriers of class `filter`
    /// visible in `context`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if `context` has no usable index.
    fn cast(
        &self,
        ray: &Ray,
        filter: BarrierClass,
        context: &SearchContext,
    ) -> Result<Vec<RayHit>, GeometryQueryError>;
}

/// Lookup from a hit barrier to its hosting level.
pub trait BarrierResolver: Send + Sync {
    /// Resolves a barrier key to the barrier and its level.
    ///
    /// # Errors
    ///
    /// Returns an error if the barrier is unknown or its level is missing.
    fn resolve(&self, key: &BarrierKey) -> Result<Barrier, BarrierResolutionError>;
}

/// Consumer that materializes computed openings in a persistent model.
pub trait OpeningSink {
    /// Receives one opening to instantiate from `template`.
    fn accept(&mut self, template: &OpeningTemplate, spec: &OpeningSpec);
}

impl OpeningSink for Vec<OpeningSpec> {
    fn accept(&mut self, _template: &OpeningTemplate, spec: &OpeningSpec) {
        self.push(spec.clone());
    }
}
