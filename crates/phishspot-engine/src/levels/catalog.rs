//! Ordered collection of levels with a cursor for progression.

use log::info;
use serde::de::Error as _;

use crate::levels::builtin::builtin_levels;
use crate::levels::level::Level;

/// The playable level sequence. Always holds at least one level.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
    cursor: usize,
}

impl LevelCatalog {
    /// Catalog backed by the built-in levels.
    pub fn builtin() -> Self {
        let levels = builtin_levels();
        info!("level catalog loaded: {} built-in levels", levels.len());
        LevelCatalog { levels, cursor: 0 }
    }

    /// Parses a catalog from a JSON array of levels. An empty array is
    /// rejected: the game needs a current level at all times.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        if levels.is_empty() {
            return Err(serde_json::Error::custom("level catalog is empty"));
        }
        info!("level catalog loaded: {} levels", levels.len());
        Ok(LevelCatalog { levels, cursor: 0 })
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.cursor]
    }

    pub fn level_index(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.levels.len()
    }

    /// Moves the cursor to the next level and returns it, or `None`
    /// when the catalog is exhausted. The cursor never wraps around.
    pub fn advance(&mut self) -> Option<&Level> {
        if !self.has_next() {
            return None;
        }
        self.cursor += 1;
        let level = &self.levels[self.cursor];
        info!("advanced to level {} ({})", self.cursor, level.id);
        Some(level)
    }
}
