use crate::model::{ElementKind, LinearElement};
use crate::query::ElementProvider;

/// A titled source model holding ducts and pipes.
#[derive(Debug, Clone)]
pub struct MepModel {
    title: String,
    elements: Vec<LinearElement>,
}

impl MepModel {
    #[must_use]
    pub fn new(title: impl Into<String>, elements: Vec<LinearElement>) -> Self {
        Self {
            title: title.into(),
            elements,
        }
    }
}

impl ElementProvider for MepModel {
    fn title(&self) -> &str {
        &self.title
    }

    fn elements(&self, kind: ElementKind) -> Vec<LinearElement> {
        self.elements
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::model::ElementId;

    #[test]
    fn elements_are_filtered_by_kind_in_model_order() {
        let make = |id, kind| {
            LinearElement::new(ElementId(id), kind, Point3::origin(), Vector3::x(), 1.0, 0.1).unwrap()
        };
        let model = MepModel::new(
            "HVAC",
            vec![
                make(1, ElementKind::Pipe),
                make(2, ElementKind::Duct),
                make(3, ElementKind::Pipe),
            ],
        );
        let pipes: Vec<ElementId> = model.elements(ElementKind::Pipe).iter().map(|e| e.id).collect();
        assert_eq!(pipes, vec![ElementId(1), ElementId(3)]);
        assert_eq!(model.elements(ElementKind::Duct).len(), 1);
    }
}
