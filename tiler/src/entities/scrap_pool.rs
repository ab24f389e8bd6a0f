use crate::TOLERANCE;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Multiset of unused remnant widths (in inches), left over after cutting tiles.
///
/// Only the width of a remnant is tracked: every remnant is assumed to have the full tile height.
/// Remnants of [`TOLERANCE`] or less are never stored.
///
/// The remnants are kept sorted in ascending order. Equal lengths stay in insertion order,
/// which makes [`ScrapPool::try_reuse`] fully deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrapPool {
    scraps: Vec<f32>,
}

impl ScrapPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the smallest remnant that can cover `needed_width` (within [`TOLERANCE`]) out of the pool.
    /// If the remnant is wider than needed, whatever is left of it goes back into the pool.
    /// Returns the length of the consumed remnant, or `None` if no remnant is wide enough.
    pub fn try_reuse(&mut self, needed_width: f32) -> Option<f32> {
        //first remnant that is not too short, which is also the smallest one that qualifies
        let idx = self
            .scraps
            .partition_point(|&s| s < needed_width - TOLERANCE);
        if idx == self.scraps.len() {
            return None;
        }
        let consumed = self.scraps.remove(idx);
        self.insert(round_to_hundredths(consumed - needed_width));
        Some(consumed)
    }

    /// Registers the offcut of a fresh tile of width `tile_width` which was cut down to `used_width`.
    /// Returns the length of the offcut if it was worth keeping.
    pub fn record_offcut(&mut self, tile_width: f32, used_width: f32) -> Option<f32> {
        let offcut = round_to_hundredths(tile_width - used_width);
        self.insert(offcut).then_some(offcut)
    }

    /// Adds a remnant to the pool, unless it is too small to be tracked.
    pub fn insert(&mut self, length: f32) -> bool {
        if length > TOLERANCE {
            let idx = self.scraps.partition_point(|&s| s <= length);
            self.scraps.insert(idx, length);
            true
        } else {
            false
        }
    }

    /// All remnants, in ascending order
    pub fn scraps(&self) -> &[f32] {
        &self.scraps
    }

    pub fn len(&self) -> usize {
        self.scraps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scraps.is_empty()
    }

    pub fn total_length(&self) -> f32 {
        self.scraps.iter().sum()
    }
}

impl FromIterator<f32> for ScrapPool {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut pool = ScrapPool::new();
        for length in iter {
            pool.insert(length);
        }
        pool
    }
}

impl Display for ScrapPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.scraps.iter().map(|s| format!("{s:.2}")).join(", "))
    }
}

fn round_to_hundredths(length: f32) -> f32 {
    (length * 100.0).round() / 100.0
}
