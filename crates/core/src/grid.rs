//! Entity grid - two sparse cell layers over the visible grid
//!
//! Entity density is low (a handful of cells on a terminal-sized surface), so
//! each layer is a set of coordinates rather than a dense per-cell array.

use std::collections::HashSet;

use crate::types::{Layer, Pos};

/// One sparse boolean layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellLayer {
    cells: HashSet<Pos>,
}

impl CellLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Mark a cell. Returns false if it was already marked.
    pub fn insert(&mut self, pos: Pos) -> bool {
        self.cells.insert(pos)
    }

    /// Unmark a cell. Returns false if it was not marked.
    pub fn remove(&mut self, pos: Pos) -> bool {
        self.cells.remove(&pos)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn retain(&mut self, f: impl FnMut(&Pos) -> bool) {
        self.cells.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in row-major order, for stable rendering and assertions
    pub fn sorted_into(&self, out: &mut Vec<Pos>) {
        out.clear();
        out.extend(self.cells.iter().copied());
        out.sort_unstable_by_key(|p| (p.y, p.x));
    }
}

/// Danger zones and rescue targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityGrid {
    danger_zones: CellLayer,
    rescue_targets: CellLayer,
}

impl EntityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn danger_zones(&self) -> &CellLayer {
        &self.danger_zones
    }

    pub fn rescue_targets(&self) -> &CellLayer {
        &self.rescue_targets
    }

    pub fn layer(&self, layer: Layer) -> &CellLayer {
        match layer {
            Layer::DangerZone => &self.danger_zones,
            Layer::RescueTarget => &self.rescue_targets,
        }
    }

    pub fn layer_mut(&mut self, layer: Layer) -> &mut CellLayer {
        match layer {
            Layer::DangerZone => &mut self.danger_zones,
            Layer::RescueTarget => &mut self.rescue_targets,
        }
    }

    pub fn is_danger(&self, pos: Pos) -> bool {
        self.danger_zones.contains(pos)
    }

    pub fn is_rescue(&self, pos: Pos) -> bool {
        self.rescue_targets.contains(pos)
    }

    /// Whether either layer marks this cell
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.is_danger(pos) || self.is_rescue(pos)
    }

    /// Drop rescue targets that sit under a danger zone or fail `keep`
    pub fn prune_rescue_targets(&mut self, keep: impl Fn(Pos) -> bool) {
        let dangers = &self.danger_zones;
        self.rescue_targets
            .retain(|p| keep(*p) && !dangers.contains(*p));
    }

    /// Whether some cell is marked on both layers
    pub fn has_overlap(&self) -> bool {
        let (small, large) = if self.danger_zones.len() <= self.rescue_targets.len() {
            (&self.danger_zones, &self.rescue_targets)
        } else {
            (&self.rescue_targets, &self.danger_zones)
        };
        small.iter().any(|p| large.contains(p))
    }
}
