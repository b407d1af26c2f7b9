//! Spawner - places and replaces entities under exclusion rules
//!
//! Every placement is a rejection loop over [`SimpleRng::position`]: sample a
//! cell in the spawn area, retry while it is taken. Loops are capped at
//! `max_attempts` and fail with [`CoreError::PlacementExhausted`] instead of
//! spinning on a full grid.
//!
//! Danger zones grow by a net `+danger_zones_per_rescue` per rescue with no
//! compensating removal, so a long enough run eventually exhausts the spawn
//! area. That rule is kept as-is.

use tracing::debug;

use crate::config::SpawnArea;
use crate::error::{CoreError, Result};
use crate::grid::EntityGrid;
use crate::rng::SimpleRng;
use crate::types::{Layer, Pos};

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    area: SpawnArea,
    max_attempts: u32,
}

impl Spawner {
    pub fn new(rng: SimpleRng, area: SpawnArea, max_attempts: u32) -> Self {
        Self {
            rng,
            area,
            max_attempts,
        }
    }

    pub fn area(&self) -> SpawnArea {
        self.area
    }

    /// Sample a cell in the spawn area
    fn sample(&mut self) -> Pos {
        let x = self.rng.position(self.area.x_buffer, self.area.width);
        let y = self.rng.position(self.area.y_buffer, self.area.height);
        Pos::new(x, y)
    }

    /// Sample until `accept` holds, or give up after `max_attempts`
    fn sample_where(&mut self, layer: Layer, accept: impl Fn(Pos) -> bool) -> Result<Pos> {
        for _ in 0..self.max_attempts {
            let pos = self.sample();
            if accept(pos) {
                return Ok(pos);
            }
        }
        Err(CoreError::PlacementExhausted {
            layer,
            attempts: self.max_attempts,
        })
    }

    /// Sample a cell neither layer marks
    fn sample_free(&mut self, grid: &EntityGrid, layer: Layer) -> Result<Pos> {
        self.sample_where(layer, |p| !grid.is_occupied(p))
    }

    /// Clear all danger zones and place `count` fresh ones.
    ///
    /// Runs before rescue targets exist, so in practice only other danger zones
    /// constrain the draw.
    pub fn place_danger_zones(&mut self, grid: &mut EntityGrid, count: usize) -> Result<()> {
        grid.layer_mut(Layer::DangerZone).clear();
        for _ in 0..count {
            let pos = self.sample_free(grid, Layer::DangerZone)?;
            grid.layer_mut(Layer::DangerZone).insert(pos);
        }
        debug!(count, "danger zones placed");
        Ok(())
    }

    /// Drop stale rescue targets and top the layer up to `target_count`.
    ///
    /// A target is stale if it lies outside the spawn area or under a danger
    /// zone. New targets avoid both layers.
    pub fn replenish_rescue_targets(
        &mut self,
        grid: &mut EntityGrid,
        target_count: usize,
    ) -> Result<()> {
        let area = self.area;
        grid.prune_rescue_targets(|p| area.contains(p));

        let mut placed = 0usize;
        while grid.rescue_targets().len() < target_count {
            let pos = self.sample_free(grid, Layer::RescueTarget)?;
            grid.layer_mut(Layer::RescueTarget).insert(pos);
            placed += 1;
        }
        debug!(placed, total = grid.rescue_targets().len(), "rescue targets replenished");
        Ok(())
    }

    /// Sample a free cell other than `vacated`
    fn sample_elsewhere(&mut self, grid: &EntityGrid, layer: Layer, vacated: Pos) -> Result<Pos> {
        self.sample_where(layer, |p| p != vacated && !grid.is_occupied(p))
    }

    /// Move the struck danger zone somewhere else. Returns the new cell.
    ///
    /// The avatar stands on the struck cell, so the replacement never lands on it.
    pub fn relocate_danger_zone(&mut self, grid: &mut EntityGrid, struck: Pos) -> Result<Pos> {
        grid.layer_mut(Layer::DangerZone).remove(struck);
        let pos = self.sample_elsewhere(grid, Layer::DangerZone, struck)?;
        grid.layer_mut(Layer::DangerZone).insert(pos);
        debug!(from = ?struck, to = ?pos, "danger zone relocated");
        Ok(pos)
    }

    /// Add `n` danger zones on cells neither layer marks
    pub fn add_danger_zones(&mut self, grid: &mut EntityGrid, n: usize) -> Result<()> {
        for _ in 0..n {
            let pos = self.sample_free(grid, Layer::DangerZone)?;
            grid.layer_mut(Layer::DangerZone).insert(pos);
        }
        debug!(added = n, total = grid.danger_zones().len(), "danger zones added");
        Ok(())
    }

    /// Clear a rescued target and spawn exactly one replacement. Returns the new cell.
    pub fn relocate_rescue_target(&mut self, grid: &mut EntityGrid, rescued: Pos) -> Result<Pos> {
        grid.layer_mut(Layer::RescueTarget).remove(rescued);
        let pos = self.sample_elsewhere(grid, Layer::RescueTarget, rescued)?;
        grid.layer_mut(Layer::RescueTarget).insert(pos);
        debug!(from = ?rescued, to = ?pos, "rescue target respawned");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, GridDims};

    fn spawner(seed: u32, width: u16, height: u16) -> Spawner {
        let cfg = GameConfig::default();
        let area = GridDims::new(width, height).spawn_area(&cfg);
        Spawner::new(SimpleRng::new(seed), area, cfg.max_placement_attempts)
    }

    #[test]
    fn place_danger_zones_replaces_existing() {
        let mut sp = spawner(1, 80, 24);
        let mut grid = EntityGrid::new();
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(10, 10));
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(11, 10));
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(12, 10));

        sp.place_danger_zones(&mut grid, 2).unwrap();
        assert_eq!(grid.danger_zones().len(), 2);
        assert!(grid.danger_zones().iter().all(|p| sp.area().contains(p)));
    }

    #[test]
    fn replenish_fills_to_count_and_avoids_danger() {
        let mut sp = spawner(2, 80, 24);
        let mut grid = EntityGrid::new();
        sp.place_danger_zones(&mut grid, 2).unwrap();
        sp.replenish_rescue_targets(&mut grid, 5).unwrap();

        assert_eq!(grid.rescue_targets().len(), 5);
        assert!(!grid.has_overlap());
    }

    #[test]
    fn replenish_drops_stale_targets() {
        let mut sp = spawner(3, 80, 24);
        let mut grid = EntityGrid::new();
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(20, 10));
        // Under a danger zone, and outside the spawn area.
        grid.layer_mut(Layer::RescueTarget).insert(Pos::new(20, 10));
        grid.layer_mut(Layer::RescueTarget).insert(Pos::new(0, 0));
        // Valid and kept.
        grid.layer_mut(Layer::RescueTarget).insert(Pos::new(30, 10));

        sp.replenish_rescue_targets(&mut grid, 5).unwrap();
        assert_eq!(grid.rescue_targets().len(), 5);
        assert!(grid.is_rescue(Pos::new(30, 10)));
        assert!(!grid.is_rescue(Pos::new(0, 0)));
        assert!(!grid.has_overlap());
    }

    #[test]
    fn relocate_danger_zone_keeps_cardinality() {
        let mut sp = spawner(4, 80, 24);
        let mut grid = EntityGrid::new();
        sp.place_danger_zones(&mut grid, 2).unwrap();
        let struck = grid.danger_zones().iter().next().unwrap();

        let moved = sp.relocate_danger_zone(&mut grid, struck).unwrap();
        assert_ne!(moved, struck);
        assert!(!grid.is_danger(struck));
        assert_eq!(grid.danger_zones().len(), 2);
    }

    #[test]
    fn add_danger_zones_grows_layer() {
        let mut sp = spawner(5, 80, 24);
        let mut grid = EntityGrid::new();
        sp.place_danger_zones(&mut grid, 2).unwrap();
        sp.replenish_rescue_targets(&mut grid, 5).unwrap();

        sp.add_danger_zones(&mut grid, 2).unwrap();
        assert_eq!(grid.danger_zones().len(), 4);
        assert_eq!(grid.rescue_targets().len(), 5);
        assert!(!grid.has_overlap());
    }

    #[test]
    fn relocate_rescue_target_keeps_cardinality() {
        let mut sp = spawner(6, 80, 24);
        let mut grid = EntityGrid::new();
        sp.place_danger_zones(&mut grid, 2).unwrap();
        sp.replenish_rescue_targets(&mut grid, 5).unwrap();
        let rescued = grid.rescue_targets().iter().next().unwrap();

        let moved = sp.relocate_rescue_target(&mut grid, rescued).unwrap();
        assert_ne!(moved, rescued);
        assert_eq!(grid.rescue_targets().len(), 5);
        assert!(!grid.has_overlap());
    }

    #[test]
    fn full_area_fails_fast() {
        // 11x13 leaves a 3x3 spawn area.
        let mut sp = spawner(7, 11, 13);
        let mut grid = EntityGrid::new();
        sp.place_danger_zones(&mut grid, 9).unwrap();

        let err = sp.add_danger_zones(&mut grid, 1).unwrap_err();
        assert_eq!(
            err,
            CoreError::PlacementExhausted {
                layer: Layer::DangerZone,
                attempts: crate::types::MAX_PLACEMENT_ATTEMPTS,
            }
        );
    }
}
