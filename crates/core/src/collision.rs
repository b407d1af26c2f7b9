//! Collision resolver - walls, danger zones and rescues for one step
//!
//! Order within a step is observable and fixed:
//!
//! 1. Walls, per axis and independently: a blocked axis costs a life and
//!    bounces that direction component, an open axis commits the move.
//! 2. Danger zone at the committed cell: costs a life, the zone relocates.
//! 3. Rescue target at the committed cell: rescue event.
//!
//! Effects are not exclusive: a bounce that leaves the avatar on a hazard
//! takes a second hit in the same step.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::{AvatarBounds, GameConfig};
use crate::error::Result;
use crate::grid::EntityGrid;
use crate::progression::Progression;
use crate::spawner::Spawner;
use crate::types::{Axis, Direction, GameEvent, Pos};

/// Upper bound on events in one step (two walls, danger, rescue, level-up)
pub const MAX_TICK_EVENTS: usize = 8;

/// The player-controlled robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Avatar {
    pub pos: Pos,
    pub direction: Direction,
}

impl Avatar {
    pub fn new(pos: Pos, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
}

impl TickReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        // Capacity covers every event a single step can produce.
        let _ = self.events.try_push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn lives_lost(&self) -> usize {
        self.events.iter().filter(|e| e.costs_life()).count()
    }

    pub fn rescued(&self) -> Option<Pos> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Rescued(p) => Some(*p),
            _ => None,
        })
    }

    pub fn level_up(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::LevelUp(l) => Some(*l),
            _ => None,
        })
    }
}

/// Move the avatar one step, bouncing off the bounds per axis.
pub fn resolve_walls(
    avatar: &mut Avatar,
    bounds: &AvatarBounds,
    progression: &mut Progression,
    report: &mut TickReport,
) {
    let (dx, dy) = avatar.direction.delta();

    let next_x = avatar.pos.x + dx;
    if bounds.contains_x(next_x) {
        avatar.pos.x = next_x;
    } else {
        progression.lose_life();
        avatar.direction = avatar.direction.bounced(Axis::Horizontal);
        report.push(GameEvent::WallHit(Axis::Horizontal));
        debug!(x = next_x, lives = progression.lives(), "wall hit");
    }

    let next_y = avatar.pos.y + dy;
    if bounds.contains_y(next_y) {
        avatar.pos.y = next_y;
    } else {
        progression.lose_life();
        avatar.direction = avatar.direction.bounced(Axis::Vertical);
        report.push(GameEvent::WallHit(Axis::Vertical));
        debug!(y = next_y, lives = progression.lives(), "wall hit");
    }
}

/// Check the committed cell against both entity layers.
pub fn resolve_hazards(
    pos: Pos,
    grid: &mut EntityGrid,
    spawner: &mut Spawner,
    progression: &mut Progression,
    config: &GameConfig,
    report: &mut TickReport,
) -> Result<()> {
    if grid.is_danger(pos) {
        progression.lose_life();
        report.push(GameEvent::DangerHit(pos));
        debug!(?pos, lives = progression.lives(), "danger zone hit");
        spawner.relocate_danger_zone(grid, pos)?;
    }

    if grid.is_rescue(pos) {
        rescue(pos, grid, spawner, progression, config, report)?;
    }

    Ok(())
}

/// Rescue event: more danger, more score, a fresh person, maybe a new level.
pub fn rescue(
    pos: Pos,
    grid: &mut EntityGrid,
    spawner: &mut Spawner,
    progression: &mut Progression,
    config: &GameConfig,
    report: &mut TickReport,
) -> Result<()> {
    // The rescued target is still marked here, so new zones cannot land on it.
    spawner.add_danger_zones(grid, config.danger_zones_per_rescue)?;
    spawner.relocate_rescue_target(grid, pos)?;
    report.push(GameEvent::Rescued(pos));

    let level_up = progression.record_rescue(config);
    debug!(?pos, score = progression.score(), "person rescued");
    if let Some(level) = level_up {
        report.push(GameEvent::LevelUp(level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridDims;
    use crate::rng::SimpleRng;
    use crate::types::Layer;

    fn setup() -> (GameConfig, AvatarBounds, Progression) {
        let cfg = GameConfig::default();
        let bounds = GridDims::new(40, 20).avatar_bounds(&cfg);
        let progression = Progression::new(&cfg);
        (cfg, bounds, progression)
    }

    #[test]
    fn open_move_commits() {
        let (_, bounds, mut prog) = setup();
        let mut avatar = Avatar::new(Pos::new(10, 10), Direction::Right);
        let mut report = TickReport::new();

        resolve_walls(&mut avatar, &bounds, &mut prog, &mut report);
        assert_eq!(avatar.pos, Pos::new(11, 10));
        assert_eq!(avatar.direction, Direction::Right);
        assert!(report.is_empty());
        assert_eq!(prog.lives(), 3);
    }

    #[test]
    fn left_wall_bounces() {
        let (_, bounds, mut prog) = setup();
        let mut avatar = Avatar::new(Pos::new(2, 10), Direction::Left);
        let mut report = TickReport::new();

        resolve_walls(&mut avatar, &bounds, &mut prog, &mut report);
        assert_eq!(avatar.pos, Pos::new(2, 10));
        assert_eq!(avatar.direction, Direction::Right);
        assert_eq!(report.events(), &[GameEvent::WallHit(Axis::Horizontal)]);
        assert_eq!(prog.lives(), 2);
    }

    #[test]
    fn bottom_wall_bounces() {
        let (_, bounds, mut prog) = setup();
        // Height 20: rows [2, 18).
        let mut avatar = Avatar::new(Pos::new(10, 17), Direction::Down);
        let mut report = TickReport::new();

        resolve_walls(&mut avatar, &bounds, &mut prog, &mut report);
        assert_eq!(avatar.pos, Pos::new(10, 17));
        assert_eq!(avatar.direction, Direction::Up);
        assert_eq!(report.lives_lost(), 1);
    }

    #[test]
    fn rescue_adds_danger_and_respawns_target() {
        let (cfg, _, mut prog) = setup();
        let area = GridDims::new(40, 20).spawn_area(&cfg);
        let mut spawner = Spawner::new(SimpleRng::new(11), area, cfg.max_placement_attempts);
        let mut grid = EntityGrid::new();
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(6, 6));
        grid.layer_mut(Layer::DangerZone).insert(Pos::new(30, 12));
        let target = Pos::new(20, 10);
        for x in [8, 12, 16, 20, 24] {
            grid.layer_mut(Layer::RescueTarget).insert(Pos::new(x, 10));
        }

        let mut report = TickReport::new();
        resolve_hazards(target, &mut grid, &mut spawner, &mut prog, &cfg, &mut report).unwrap();

        assert_eq!(report.rescued(), Some(target));
        assert_eq!(report.lives_lost(), 0);
        assert_eq!(grid.danger_zones().len(), 4);
        assert_eq!(grid.rescue_targets().len(), 5);
        assert_eq!(prog.score(), 10);
        assert!(!grid.has_overlap());
    }
}
