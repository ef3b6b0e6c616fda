use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::ElementId;

/// Identity of a level (reference elevation) in the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(pub i64);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level #{}", self.0)
    }
}

/// Class of barrier geometry a ray cast is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrierClass {
    #[default]
    Wall,
    Floor,
    Roof,
}

/// Identity of a physical barrier as reported by a ray hit.
///
/// `linked_id` is set when the barrier lives in a linked model; two hits
/// denote the same barrier exactly when both ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarrierKey {
    /// Element id of the barrier (or of the link instance holding it).
    pub barrier_id: ElementId,
    /// Element id inside the linked model, if any.
    pub linked_id: Option<ElementId>,
}

impl BarrierKey {
    /// Key of a barrier in the host model itself.
    #[must_use]
    pub fn local(barrier_id: ElementId) -> Self {
        Self {
            barrier_id,
            linked_id: None,
        }
    }

    /// Key of a barrier inside a linked model.
    #[must_use]
    pub fn linked(barrier_id: ElementId, linked_id: ElementId) -> Self {
        Self {
            barrier_id,
            linked_id: Some(linked_id),
        }
    }
}

impl fmt::Display for BarrierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.linked_id {
            Some(linked) => write!(f, "{}/{linked}", self.barrier_id),
            None => write!(f, "{}", self.barrier_id),
        }
    }
}

/// A resolved barrier: its identity and the level it is hosted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barrier {
    pub key: BarrierKey,
    pub level_id: LevelId,
}

/// A named reference elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub elevation: f64,
}
