use serde::{Deserialize, Serialize};

use crate::error::GeometryQueryError;
use crate::geometry::Aabb;
use crate::math::Point3;

/// The 3D view a ray cast searches in.
///
/// Template views carry no geometry and cannot be searched. An optional
/// section box restricts hits to the region it encloses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchContext {
    pub name: String,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub section_box: Option<Aabb>,
}

impl SearchContext {
    /// Creates an unbounded, non-template search context.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_template: false,
            section_box: None,
        }
    }

    /// Restricts the context to a section box.
    #[must_use]
    pub fn with_section_box(mut self, section_box: Aabb) -> Self {
        self.section_box = Some(section_box);
        self
    }

    /// Checks that the context can be searched.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError::InvalidContext`] for a template view.
    pub fn validate(&self) -> Result<(), GeometryQueryError> {
        if self.is_template {
            return Err(GeometryQueryError::InvalidContext {
                context: self.name.clone(),
                reason: "view is a template".to_owned(),
            });
        }
        Ok(())
    }

    /// Returns whether `point` is visible in this context.
    #[must_use]
    pub fn is_visible(&self, point: &Point3) -> bool {
        self.section_box.as_ref().map_or(true, |b| b.contains(point))
    }
}
