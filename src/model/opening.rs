use serde::{Deserialize, Serialize};

use crate::math::Point3;

use super::barrier::{BarrierKey, LevelId};
use super::element::ElementId;

/// Where and how big a penetration opening should be.
///
/// The footprint is square: `width == height == diameter` of the crossing
/// element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningSpec {
    /// The duct or pipe that crosses the barrier.
    pub element_id: ElementId,
    /// Insertion point on the element's centerline.
    pub position: Point3,
    /// The barrier hosting the opening.
    pub barrier: BarrierKey,
    /// The barrier's level at computation time.
    pub level_id: LevelId,
    pub width: f64,
    pub height: f64,
}

impl OpeningSpec {
    /// Returns the instance parameter values to write when materializing
    /// this opening from `template`, as `(parameter name, value)` pairs.
    #[must_use]
    pub fn parameters<'t>(&self, template: &'t OpeningTemplate) -> [(&'t str, f64); 2] {
        [
            (template.width_parameter.as_str(), self.width),
            (template.height_parameter.as_str(), self.height),
        ]
    }
}

/// The loadable opening type that openings are instantiated from.
///
/// `width_parameter` and `height_parameter` name the instance parameters a
/// sink writes [`OpeningSpec::width`] and [`OpeningSpec::height`] into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningTemplate {
    pub family_name: String,
    pub width_parameter: String,
    pub height_parameter: String,
    /// Whether the template is ready for instantiation.
    pub active: bool,
}

impl OpeningTemplate {
    /// Creates an active template with `Width`/`Height` parameters.
    #[must_use]
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            width_parameter: "Width".to_owned(),
            height_parameter: "Height".to_owned(),
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_use_template_names() {
        let mut template = OpeningTemplate::new("Opening");
        template.width_parameter = "Opening Width".to_owned();
        let spec = OpeningSpec {
            element_id: ElementId(1),
            position: Point3::origin(),
            barrier: BarrierKey::local(ElementId(2)),
            level_id: LevelId(3),
            width: 200.0,
            height: 150.0,
        };
        assert_eq!(
            spec.parameters(&template),
            [("Opening Width", 200.0), ("Height", 150.0)]
        );
    }
}
