use crate::config::EngineConfig;
use crate::error::PreconditionError;
use crate::model::OpeningTemplate;
use crate::query::{ElementProvider, SearchContext};

/// Collaborators a placement run needs, validated before any geometry work.
///
/// Can only be obtained through [`PlacementSetup::check`], so a batch never
/// starts with a missing source model, template or search context.
#[derive(Clone, Copy)]
pub struct PlacementSetup<'a> {
    source: &'a dyn ElementProvider,
    template: &'a OpeningTemplate,
    context: &'a SearchContext,
}

impl<'a> PlacementSetup<'a> {
    /// Picks the source model, opening template and search context for a run.
    ///
    /// `config` is validated first; then
    /// - the source is the first model whose title contains
    ///   `config.source_model_suffix`;
    /// - the template is the first one named `config.template_family`, and
    ///   it must already be active;
    /// - the context is the first non-template one.
    ///
    /// # Errors
    ///
    /// Returns the first unmet precondition, checked in the order above.
    pub fn check<M: ElementProvider>(
        sources: &'a [M],
        templates: &'a [OpeningTemplate],
        contexts: &'a [SearchContext],
        config: &EngineConfig,
    ) -> Result<Self, PreconditionError> {
        config
            .validate()
            .map_err(|err| PreconditionError::InvalidConfig {
                reason: err.to_string(),
            })?;

        let source = sources
            .iter()
            .find(|m| m.title().contains(config.source_model_suffix.as_str()))
            .ok_or_else(|| PreconditionError::SourceModelNotFound {
                suffix: config.source_model_suffix.clone(),
            })?;

        let template = templates
            .iter()
            .find(|t| t.family_name == config.template_family)
            .ok_or_else(|| PreconditionError::MissingTemplate {
                family: config.template_family.clone(),
            })?;
        if !template.active {
            return Err(PreconditionError::TemplateInactive {
                family: template.family_name.clone(),
            });
        }

        let context = contexts
            .iter()
            .find(|c| !c.is_template)
            .ok_or(PreconditionError::NoSearchContext)?;

        Ok(Self {
            source,
            template,
            context,
        })
    }

    /// Returns the model elements are read from.
    #[must_use]
    pub fn source(&self) -> &'a dyn ElementProvider {
        self.source
    }

    /// Returns the template openings are instantiated from.
    #[must_use]
    pub fn template(&self) -> &'a OpeningTemplate {
        self.template
    }

    /// Returns the view rays are cast in.
    #[must_use]
    pub fn context(&self) -> &'a SearchContext {
        self.context
    }
}

impl std::fmt::Debug for PlacementSetup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementSetup")
            .field("source", &self.source.title())
            .field("template", &self.template.family_name)
            .field("context", &self.context.name)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scene::MepModel;

    fn models() -> Vec<MepModel> {
        vec![
            MepModel::new("Project_AR", Vec::new()),
            MepModel::new("Project_HVAC", Vec::new()),
        ]
    }

    fn template_view() -> SearchContext {
        let mut view = SearchContext::new("3D template");
        view.is_template = true;
        view
    }

    #[test]
    fn picks_matching_collaborators() {
        let config = EngineConfig::default();
        let models = models();
        let templates = [OpeningTemplate::new("Sleeve"), OpeningTemplate::new("Opening")];
        let contexts = [template_view(), SearchContext::new("{3D}")];

        let setup = PlacementSetup::check(&models, &templates, &contexts, &config).unwrap();
        assert_eq!(setup.source().title(), "Project_HVAC");
        assert_eq!(setup.template().family_name, "Opening");
        assert_eq!(setup.context().name, "{3D}");
    }

    #[test]
    fn config_without_kinds_is_rejected_before_the_run() {
        let config = EngineConfig {
            kinds: Vec::new(),
            ..EngineConfig::default()
        };
        let err = PlacementSetup::check(
            &models(),
            &[OpeningTemplate::new("Opening")],
            &[SearchContext::new("{3D}")],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, PreconditionError::InvalidConfig { .. }));
    }

    #[test]
    fn blank_template_family_is_rejected() {
        let config = EngineConfig {
            template_family: "  ".to_owned(),
            ..EngineConfig::default()
        };
        let err = PlacementSetup::check(
            &models(),
            &[OpeningTemplate::new("  ")],
            &[SearchContext::new("{3D}")],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, PreconditionError::InvalidConfig { .. }));
    }

    #[test]
    fn missing_source_model() {
        let config = EngineConfig::default();
        let models = vec![MepModel::new("Project_AR", Vec::new())];
        let err = PlacementSetup::check(
            &models,
            &[OpeningTemplate::new("Opening")],
            &[SearchContext::new("{3D}")],
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PreconditionError::SourceModelNotFound {
                suffix: "HVAC".to_owned()
            }
        );
    }

    #[test]
    fn missing_template() {
        let config = EngineConfig::default();
        let err = PlacementSetup::check(
            &models(),
            &[OpeningTemplate::new("Sleeve")],
            &[SearchContext::new("{3D}")],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, PreconditionError::MissingTemplate { .. }));
    }

    #[test]
    fn inactive_template() {
        let config = EngineConfig::default();
        let mut template = OpeningTemplate::new("Opening");
        template.active = false;
        let err = PlacementSetup::check(&models(), &[template], &[SearchContext::new("{3D}")], &config)
            .unwrap_err();
        assert!(matches!(err, PreconditionError::TemplateInactive { .. }));
    }

    #[test]
    fn only_template_views() {
        let config = EngineConfig::default();
        let err = PlacementSetup::check(
            &models(),
            &[OpeningTemplate::new("Opening")],
            &[template_view()],
            &config,
        )
        .unwrap_err();
        assert_eq!(err, PreconditionError::NoSearchContext);
    }
}
