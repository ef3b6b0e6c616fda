pub mod batch;
pub mod dedup;
pub mod placement;
pub mod preconditions;

pub use batch::{BatchReport, PlaceOpenings};
pub use dedup::deduplicate;
pub use placement::{opening_position, PlaceOpening};
pub use preconditions::PlacementSetup;
