//! Level layouts handed to the rule generator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The current level a rule-set is generated for.
///
/// Each cell of the grid lists the sprites standing on it, separated by
/// commas (`"wall"`, `"floor, avatar"`, `""`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelDescription {
    grid: Vec<Vec<String>>,
}

impl LevelDescription {
    pub fn new(grid: Vec<Vec<String>>) -> Self {
        Self { grid }
    }

    /// Builds a level from rows of string slices.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        Self {
            grid: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.as_ref().to_string()).collect())
                .collect(),
        }
    }

    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }

    /// Distinct sprite names appearing anywhere in the level.
    ///
    /// Names are trimmed, empty entries are skipped, and the result keeps
    /// the row-major order of first appearance.
    pub fn useful_sprites(&self) -> Vec<String> {
        let mut sprites: Vec<String> = Vec::new();
        for cell in self.grid.iter().flatten() {
            for part in cell.split(',') {
                let name = part.trim();
                if !name.is_empty() && !sprites.iter().any(|s| s == name) {
                    sprites.push(name.to_string());
                }
            }
        }
        sprites
    }
}
