use serde::{Deserialize, Serialize};

use crate::math::{Point3, TOLERANCE};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Returns whether `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] - TOLERANCE && point[i] <= self.max[i] + TOLERANCE)
    }
}
