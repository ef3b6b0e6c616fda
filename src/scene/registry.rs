use rustc_hash::FxHashMap;

use crate::error::BarrierResolutionError;
use crate::model::{Barrier, BarrierKey, Level, LevelId};
use crate::query::BarrierResolver;

/// Barrier-to-level lookup backed by hash maps.
#[derive(Debug, Clone, Default)]
pub struct BarrierRegistry {
    barriers: FxHashMap<BarrierKey, LevelId>,
    levels: FxHashMap<LevelId, Level>,
}

impl BarrierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a level.
    pub fn add_level(&mut self, level: Level) {
        self.levels.insert(level.id, level);
    }

    /// Registers a barrier hosted on `level_id`.
    pub fn add_barrier(&mut self, key: BarrierKey, level_id: LevelId) {
        self.barriers.insert(key, level_id);
    }

    /// Forgets a barrier, making its key stale. Returns whether it existed.
    pub fn remove_barrier(&mut self, key: &BarrierKey) -> bool {
        self.barriers.remove(key).is_some()
    }

    /// Returns a level by id.
    #[must_use]
    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.get(&id)
    }
}

impl BarrierResolver for BarrierRegistry {
    fn resolve(&self, key: &BarrierKey) -> Result<Barrier, BarrierResolutionError> {
        let level_id = *self
            .barriers
            .get(key)
            .ok_or(BarrierResolutionError::NotFound(*key))?;
        if !self.levels.contains_key(&level_id) {
            return Err(BarrierResolutionError::MissingLevel {
                barrier: *key,
                level: level_id,
            });
        }
        Ok(Barrier {
            key: *key,
            level_id,
        })
    }
}
