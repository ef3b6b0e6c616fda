//! In-memory implementations of the engine's external interfaces.
//!
//! Useful for tests and for hosts that can export their geometry up front.
//! [`BarrierScene`] is a brute-force index: every cast visits every body.

mod index;
mod mep_model;
mod registry;

pub use index::{BarrierScene, SceneBarrier};
pub use mep_model::MepModel;
pub use registry::BarrierRegistry;
