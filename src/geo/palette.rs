//! Category color assignment.
//!
//! Every distinct value of the category column gets one numeric color in `[0, 1)`,
//! which the backend maps through the series' [`ColorScale`]. The value is derived
//! from a seeded hash of the category, so identical inputs and seed always give
//! identical colors.

use super::types::ColorScale;
use crate::error::Result;
use crate::models::{Cell, Table};
use ahash::RandomState;

/// Column name used for the color when the map is joined back onto the input rows.
pub(crate) const COLOR_COLUMN: &str = "__geoviz_color";

// Fixed key material mixed with the caller's seed.
const K1: u64 = 0x9E37_79B9_7F4A_7C15;
const K2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const K3: u64 = 0x1656_67B1_9E37_79F9;

/// How markers of a point series are colored.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorStrategy {
    /// One CSS color for every marker.
    Fixed(String),
    /// One color per distinct category value, rendered through `scale`.
    ByCategory { seed: u64, scale: ColorScale },
}

impl Default for ColorStrategy {
    fn default() -> Self {
        ColorStrategy::ByCategory {
            seed: 0,
            scale: ColorScale::default(),
        }
    }
}

/// Category value to color value, in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColors {
    entries: Vec<(Cell, f64)>,
}

impl CategoryColors {
    /// Assign a color to each distinct value of `column`.
    pub fn assign(table: &Table, column: &str, seed: u64) -> Result<Self> {
        let state = RandomState::with_seeds(seed, seed ^ K1, seed ^ K2, seed ^ K3);
        let entries = table
            .distinct(column)?
            .into_iter()
            .map(|value| {
                let color = unit_interval(state.hash_one(&value));
                (value, color)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, value: &Cell) -> Option<f64> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cell, f64)> {
        self.entries.iter().map(|(v, c)| (v, *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-column table `[column, COLOR_COLUMN]` ready to join onto the source rows.
    pub(crate) fn to_table(&self, column: &str) -> Table {
        let rows = self
            .entries
            .iter()
            .map(|(v, c)| vec![v.clone(), Cell::Number(*c)])
            .collect();
        Table::from_rows([column, COLOR_COLUMN], rows)
    }
}

/// Top 53 bits of the hash as a float in `[0, 1)`.
fn unit_interval(h: u64) -> f64 {
    (h >> 11) as f64 / (1u64 << 53) as f64
}
