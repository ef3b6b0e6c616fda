use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::geometry::LineSegment;
use crate::math::{Point3, Vector3};

/// Identity of an element in a host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of linear MEP element that may need a wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Duct,
    Pipe,
}

/// A duct or pipe modeled as a straight centerline with a diameter.
///
/// A read-only snapshot taken from the source model at the start of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearElement {
    /// Host identity of the element.
    pub id: ElementId,
    /// Whether this is a duct or a pipe.
    pub kind: ElementKind,
    /// The element's centerline.
    pub centerline: LineSegment,
    /// Nominal diameter, in model units.
    pub diameter: f64,
}

impl LinearElement {
    /// Creates a linear element from its start point, direction and length.
    ///
    /// # Errors
    ///
    /// Returns an error if the centerline is degenerate or the diameter is
    /// not a positive finite number.
    pub fn new(
        id: ElementId,
        kind: ElementKind,
        start: Point3,
        direction: Vector3,
        length: f64,
        diameter: f64,
    ) -> Result<Self> {
        let centerline = LineSegment::new(start, direction, length)?;
        Self::with_centerline(id, kind, centerline, diameter)
    }

    /// Creates a linear element from an existing centerline.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is not a positive finite number.
    pub fn with_centerline(
        id: ElementId,
        kind: ElementKind,
        centerline: LineSegment,
        diameter: f64,
    ) -> Result<Self> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "element {id} has invalid diameter {diameter}"
            ))
            .into());
        }
        Ok(Self {
            id,
            kind,
            centerline,
            diameter,
        })
    }

    /// Returns the start point of the centerline.
    #[must_use]
    pub fn start_point(&self) -> &Point3 {
        self.centerline.start()
    }

    /// Returns the unit direction of the centerline.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        self.centerline.direction()
    }

    /// Returns the length of the centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.centerline.length()
    }
}
