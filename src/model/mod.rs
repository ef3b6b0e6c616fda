pub mod barrier;
pub mod element;
pub mod hit;
pub mod opening;

pub use barrier::{Barrier, BarrierClass, BarrierKey, Level, LevelId};
pub use element::{ElementId, ElementKind, LinearElement};
pub use hit::{CanonicalHit, RayHit};
pub use opening::{OpeningSpec, OpeningTemplate};
