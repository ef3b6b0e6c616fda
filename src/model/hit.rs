use std::ops::Deref;

use super::barrier::BarrierKey;

/// One intersection of a ray with barrier geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin along its direction.
    pub proximity: f64,
    /// The barrier that was hit.
    pub barrier: BarrierKey,
}

impl RayHit {
    #[must_use]
    pub fn new(proximity: f64, barrier: BarrierKey) -> Self {
        Self { proximity, barrier }
    }
}

/// The single hit kept to represent one barrier crossed by one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalHit(RayHit);

impl CanonicalHit {
    pub(crate) fn new(hit: RayHit) -> Self {
        Self(hit)
    }

    /// Returns the underlying ray hit.
    #[must_use]
    pub fn into_hit(self) -> RayHit {
        self.0
    }
}

impl Deref for CanonicalHit {
    type Target = RayHit;

    fn deref(&self) -> &RayHit {
        &self.0
    }
}
