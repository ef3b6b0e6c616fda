use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A box with arbitrary orientation, used as the body of a straight wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedBox {
    center: Point3,
    axes: [Vector3; 3],
    half_extents: [f64; 3],
}

impl OrientedBox {
    /// Creates a box from its center, three orthonormal axes and half extents.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is not unit length, the axes are not
    /// mutually orthogonal, or an extent is not positive.
    pub fn new(center: Point3, axes: [Vector3; 3], half_extents: [f64; 3]) -> Result<Self> {
        for axis in &axes {
            if (axis.norm() - 1.0).abs() > 1e-9 {
                return Err(GeometryError::Degenerate("box axes must be unit length".into()).into());
            }
        }
        if axes[0].dot(&axes[1]).abs() > 1e-9
            || axes[1].dot(&axes[2]).abs() > 1e-9
            || axes[0].dot(&axes[2]).abs() > 1e-9
        {
            return Err(GeometryError::Degenerate("box axes must be orthogonal".into()).into());
        }
        if half_extents.iter().any(|h| *h < TOLERANCE) {
            return Err(GeometryError::Degenerate("box extents must be positive".into()).into());
        }
        Ok(Self {
            center,
            axes,
            half_extents,
        })
    }

    /// Creates the body of a straight vertical wall.
    ///
    /// `start` and `end` are the two ends of the wall's base centerline;
    /// the body extends `thickness / 2` to either side and `height` upward
    /// along +Z.
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline is zero-length or vertical, or the
    /// thickness or height is not positive.
    pub fn wall(start: Point3, end: Point3, thickness: f64, height: f64) -> Result<Self> {
        let run = end - start;
        let length = run.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let along = run / length;
        let across = Vector3::z().cross(&along);
        let across_len = across.norm();
        if across_len < TOLERANCE {
            return Err(GeometryError::Degenerate("wall baseline is vertical".into()).into());
        }
        let across = across / across_len;
        let up = along.cross(&across);

        let center = start + run * 0.5 + up * (height * 0.5);
        Self::new(
            center,
            [along, across, up],
            [length * 0.5, thickness * 0.5, height * 0.5],
        )
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the box's local axes.
    #[must_use]
    pub fn axes(&self) -> &[Vector3; 3] {
        &self.axes
    }

    /// Returns the half extents along each local axis.
    #[must_use]
    pub fn half_extents(&self) -> [f64; 3] {
        self.half_extents
    }
}
