use crate::error::GeometryQueryError;
use crate::math::{unit_direction, Point3, Vector3};

use super::LineSegment;

/// A half-line cast from `origin` along a unit `direction`.
///
/// `max_distance` bounds the search; `None` means unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
    max_distance: Option<f64>,
}

impl Ray {
    /// Creates an unbounded ray.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError::ZeroDirection`] for a degenerate direction.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self, GeometryQueryError> {
        let direction = unit_direction(&direction).ok_or(GeometryQueryError::ZeroDirection)?;
        Ok(Self {
            origin,
            direction,
            max_distance: None,
        })
    }

    /// Creates a ray covering exactly the run of `segment`.
    #[must_use]
    pub fn along(segment: &LineSegment) -> Self {
        Self {
            origin: *segment.start(),
            direction: *segment.direction(),
            max_distance: Some(segment.length()),
        }
    }

    /// Bounds the ray to `distance` from its origin.
    #[must_use]
    pub fn with_max_distance(mut self, distance: f64) -> Self {
        self.max_distance = Some(distance);
        self
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the search bound, if any.
    #[must_use]
    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// Returns whether a hit at `proximity` lies on this ray.
    #[must_use]
    pub fn reaches(&self, proximity: f64) -> bool {
        proximity >= 0.0 && self.max_distance.map_or(true, |max| proximity <= max)
    }

    /// Returns the point at `proximity` along the ray.
    #[must_use]
    pub fn point_at(&self, proximity: f64) -> Point3 {
        self.origin + self.direction * proximity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_direction_is_degenerate() {
        let err = Ray::new(Point3::origin(), Vector3::zeros()).unwrap_err();
        assert_eq!(err, GeometryQueryError::ZeroDirection);
    }

    #[test]
    fn unbounded_ray_reaches_far_hits() {
        let ray = Ray::new(Point3::origin(), Vector3::x()).unwrap();
        assert!(ray.reaches(1.0e9));
        assert!(!ray.reaches(-1.0));
    }

    #[test]
    fn ray_along_segment_is_bounded_by_its_length() {
        let seg = LineSegment::new(Point3::new(1.0, 2.0, 3.0), Vector3::y(), 300.0).unwrap();
        let ray = Ray::along(&seg);
        assert_eq!(ray.max_distance(), Some(300.0));
        assert!(ray.reaches(300.0));
        assert!(!ray.reaches(350.0));
        assert_eq!(ray.point_at(10.0), Point3::new(1.0, 12.0, 3.0));
    }
}
