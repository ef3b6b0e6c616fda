use crate::error::BarrierResolutionError;
use crate::math::Point3;
use crate::model::{CanonicalHit, LinearElement, OpeningSpec};
use crate::query::BarrierResolver;

/// Returns the insertion point `proximity` along an element's centerline.
#[must_use]
pub fn opening_position(element: &LinearElement, proximity: f64) -> Point3 {
    element.centerline.endpoint(proximity)
}

/// Turns one canonical hit of an element into an opening specification.
pub struct PlaceOpening<'a> {
    element: &'a LinearElement,
    hit: CanonicalHit,
}

impl<'a> PlaceOpening<'a> {
    /// Creates a new `PlaceOpening` operation.
    #[must_use]
    pub fn new(element: &'a LinearElement, hit: CanonicalHit) -> Self {
        Self { element, hit }
    }

    /// Executes the operation.
    ///
    /// The barrier's level is looked up fresh through `resolver`; the
    /// opening is square, sized to the element's diameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the hit barrier cannot be resolved to a level.
    pub fn execute(&self, resolver: &dyn BarrierResolver) -> Result<OpeningSpec, BarrierResolutionError> {
        let barrier = resolver.resolve(&self.hit.barrier)?;
        Ok(OpeningSpec {
            element_id: self.element.id,
            position: opening_position(self.element, self.hit.proximity),
            barrier: self.hit.barrier,
            level_id: barrier.level_id,
            width: self.element.diameter,
            height: self.element.diameter,
        })
    }
}
