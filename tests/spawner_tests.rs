//! Spawner and grid tests

use robo_rescue::core::{
    CoreError, EntityGrid, GameConfig, GameState, GridDims, SimpleRng, Spawner,
};
use robo_rescue::types::{Layer, Pos};

fn spawner(seed: u32, dims: GridDims) -> Spawner {
    let cfg = GameConfig::default();
    Spawner::new(SimpleRng::new(seed), dims.spawn_area(&cfg), cfg.max_placement_attempts)
}

#[test]
fn test_new_run_has_initial_entities() {
    for seed in [1, 7, 12345, u32::MAX] {
        let g = GameState::new(GameConfig::default(), GridDims::new(80, 24), seed).unwrap();
        let area = GridDims::new(80, 24).spawn_area(g.config());

        assert_eq!(g.grid().danger_zones().len(), 2, "seed {}", seed);
        assert_eq!(g.grid().rescue_targets().len(), 5, "seed {}", seed);
        assert!(!g.grid().has_overlap());
        assert!(g.grid().danger_zones().iter().all(|p| area.contains(p)));
        assert!(g.grid().rescue_targets().iter().all(|p| area.contains(p)));
    }
}

#[test]
fn test_new_run_initial_state() {
    let g = GameState::new(GameConfig::default(), GridDims::new(80, 24), 3).unwrap();
    assert_eq!(g.avatar().pos, Pos::new(39, 19));
    assert_eq!(g.lives(), 3);
    assert_eq!(g.score(), 0);
    assert_eq!(g.level(), 1);
    assert_eq!(g.movement_delay().as_micros(), 120_000);
}

#[test]
fn test_same_seed_same_layout() {
    let a = GameState::new(GameConfig::default(), GridDims::new(80, 24), 42).unwrap();
    let b = GameState::new(GameConfig::default(), GridDims::new(80, 24), 42).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_tiny_terminal_is_rejected() {
    let err = GameState::new(GameConfig::default(), GridDims::new(8, 10), 1).unwrap_err();
    assert!(matches!(err, CoreError::GridTooSmall { width: 8, height: 10, .. }));
}

#[test]
fn test_positions_respect_buffers() {
    let mut rng = SimpleRng::new(2024);
    for _ in 0..1000 {
        let x = rng.position(4, 80);
        assert!((4..76).contains(&x));
    }
}

#[test]
fn test_growth_until_area_is_full() {
    // 11x13 leaves a 3x3 spawn area.
    let dims = GridDims::new(11, 13);
    let mut sp = spawner(11, dims);
    let mut grid = EntityGrid::new();

    sp.place_danger_zones(&mut grid, 2).unwrap();
    sp.replenish_rescue_targets(&mut grid, 5).unwrap();
    sp.add_danger_zones(&mut grid, 2).unwrap();
    assert_eq!(grid.danger_zones().len() + grid.rescue_targets().len(), 9);

    let err = sp.add_danger_zones(&mut grid, 1).unwrap_err();
    assert!(matches!(err, CoreError::PlacementExhausted { layer: Layer::DangerZone, .. }));
}

#[test]
fn test_sorted_cells_are_row_major() {
    let mut grid = EntityGrid::new();
    let layer = grid.layer_mut(Layer::RescueTarget);
    layer.insert(Pos::new(9, 7));
    layer.insert(Pos::new(3, 7));
    layer.insert(Pos::new(20, 5));

    let mut out = Vec::new();
    grid.rescue_targets().sorted_into(&mut out);
    assert_eq!(out, vec![Pos::new(20, 5), Pos::new(3, 7), Pos::new(9, 7)]);
}
