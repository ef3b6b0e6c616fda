use crate::error::{GeometryError, Result};
use crate::math::{unit_direction, Point3, Vector3};

/// A bounded straight centerline.
///
/// Parameterized by arc length: `P(t) = start + t * direction` for
/// `t` in `[0, length]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point3,
    direction: Vector3,
    length: f64,
}

impl LineSegment {
    /// Creates a segment from a start point, a direction and a length.
    ///
    /// A direction that is already unit length is stored unchanged; any
    /// other non-zero direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is zero-length or the length is
    /// negative or not finite.
    pub fn new(start: Point3, direction: Vector3, length: f64) -> Result<Self> {
        let direction = unit_direction(&direction).ok_or(GeometryError::ZeroVector)?;
        if !length.is_finite() || length < 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "segment length must be finite and non-negative, got {length}"
            ))
            .into());
        }
        Ok(Self {
            start,
            direction,
            length,
        })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the unit direction of the segment.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the point at distance `t` from the start.
    #[must_use]
    pub fn endpoint(&self, t: f64) -> Point3 {
        self.start + self.direction * t
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PenetraError;
    use crate::math::TOLERANCE;

    #[test]
    fn endpoint_walks_along_direction() {
        let seg = LineSegment::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0), 300.0).unwrap();
        assert_eq!(seg.endpoint(120.0), Point3::new(120.0, 0.0, 0.0));
        assert_eq!(seg.endpoint(seg.length()), Point3::new(300.0, 0.0, 0.0));
    }

    #[test]
    fn unit_direction_is_kept_exactly() {
        let dir = Vector3::new(0.36, 0.48, 0.8);
        let seg = LineSegment::new(Point3::origin(), dir, 10.0).unwrap();
        assert_eq!(*seg.direction(), dir);
    }

    #[test]
    fn scaled_direction_is_normalized() {
        let seg = LineSegment::new(Point3::origin(), Vector3::new(0.0, 0.0, 5.0), 10.0).unwrap();
        assert!((seg.direction().z - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_direction_is_rejected() {
        let err = LineSegment::new(Point3::origin(), Vector3::zeros(), 1.0).unwrap_err();
        assert!(matches!(err, PenetraError::Geometry(GeometryError::ZeroVector)));
    }

    #[test]
    fn negative_length_is_rejected() {
        assert!(LineSegment::new(Point3::origin(), Vector3::x(), -1.0).is_err());
    }
}
