use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use crate::config::EngineConfig;
use crate::error::{PenetraError, PlacementFailure};
use crate::model::{LinearElement, OpeningSpec, OpeningTemplate};
use crate::query::{BarrierResolver, OpeningSink, RayCaster, SpatialQuery};

use super::dedup::deduplicate;
use super::placement::PlaceOpening;
use super::preconditions::PlacementSetup;

/// Outcome of a placement run.
///
/// `openings` are grouped by source element in input order; `failures`
/// lists every element or crossing that could not be placed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub openings: Vec<OpeningSpec>,
    pub failures: Vec<PlacementFailure>,
}

impl BatchReport {
    /// Returns whether every crossing was placed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Hands every opening to `sink`, in order. Returns how many were sent.
    pub fn emit(&self, template: &OpeningTemplate, sink: &mut dyn OpeningSink) -> usize {
        for spec in &self.openings {
            sink.accept(template, spec);
        }
        self.openings.len()
    }
}

/// Openings and failures produced by one element.
#[derive(Debug, Default)]
struct ElementOutcome {
    openings: Vec<OpeningSpec>,
    failures: Vec<PlacementFailure>,
}

/// Computes openings for every duct and pipe of the source model.
///
/// For each element: cast a ray along its centerline, reduce the hits to
/// one per barrier, then place an opening at each. Elements never affect
/// each other, so a failure is recorded against its element (or crossing)
/// and the run moves on.
pub struct PlaceOpenings<'a> {
    setup: PlacementSetup<'a>,
    query: &'a dyn SpatialQuery,
    resolver: &'a dyn BarrierResolver,
    config: &'a EngineConfig,
}

impl<'a> PlaceOpenings<'a> {
    /// Creates a new `PlaceOpenings` operation.
    #[must_use]
    pub fn new(
        setup: PlacementSetup<'a>,
        query: &'a dyn SpatialQuery,
        resolver: &'a dyn BarrierResolver,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            setup,
            query,
            resolver,
            config,
        }
    }

    /// Executes the run.
    ///
    /// Elements are processed kind by kind in the order of
    /// `config.kinds`. With `config.parallel` the per-element work runs on
    /// the rayon pool; output order is the same either way.
    #[must_use]
    pub fn execute(&self) -> BatchReport {
        let span = info_span!(
            "place_openings",
            source = %self.setup.source().title(),
            context = %self.setup.context().name
        );
        let _guard = span.enter();

        let elements: Vec<LinearElement> = self
            .config
            .kinds
            .iter()
            .flat_map(|&kind| self.setup.source().elements(kind))
            .collect();

        let caster = RayCaster::new(self.query, self.config.barrier_class, self.setup.context());

        let outcomes: Vec<ElementOutcome> = if self.config.parallel {
            elements
                .par_iter()
                .map(|element| self.process_element(&caster, element))
                .collect()
        } else {
            elements
                .iter()
                .map(|element| self.process_element(&caster, element))
                .collect()
        };

        let mut report = BatchReport::default();
        for outcome in outcomes {
            report.openings.extend(outcome.openings);
            report.failures.extend(outcome.failures);
        }

        info!(
            elements = elements.len(),
            openings = report.openings.len(),
            failures = report.failures.len(),
            "placement finished"
        );
        report
    }

    /// Executes the run and hands the openings to `sink`.
    pub fn execute_into(&self, sink: &mut dyn OpeningSink) -> BatchReport {
        let report = self.execute();
        report.emit(self.setup.template(), sink);
        report
    }

    fn process_element(&self, caster: &RayCaster<'_>, element: &LinearElement) -> ElementOutcome {
        let mut outcome = ElementOutcome::default();

        let raw = match caster.cast_along(&element.centerline) {
            Ok(hits) => hits,
            Err(error) => {
                warn!(element = %element.id, %error, "ray cast failed");
                outcome.failures.push(PlacementFailure {
                    element: element.id,
                    barrier: None,
                    error: PenetraError::from(error),
                });
                return outcome;
            }
        };

        let crossings = deduplicate(&raw, element.length());
        debug!(
            element = %element.id,
            kind = ?element.kind,
            raw = raw.len(),
            crossings = crossings.len(),
            "element cast"
        );

        for hit in crossings {
            match PlaceOpening::new(element, hit).execute(self.resolver) {
                Ok(spec) => outcome.openings.push(spec),
                Err(error) => {
                    warn!(element = %element.id, barrier = %hit.barrier, %error, "opening skipped");
                    outcome.failures.push(PlacementFailure {
                        element: element.id,
                        barrier: Some(hit.barrier),
                        error: PenetraError::from(error),
                    });
                }
            }
        }
        outcome
    }
}
