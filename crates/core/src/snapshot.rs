use crate::config::GridDims;
use crate::progression::Difficulty;
use crate::types::{Direction, Pos};

/// Owned view of one frame, consumed by renderers and tests.
///
/// Entity cells are sorted row-major so two snapshots of the same state
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub dims: GridDims,
    pub avatar: Pos,
    pub direction: Direction,
    pub danger_zones: Vec<Pos>,
    pub rescue_targets: Vec<Pos>,
    pub lives: u32,
    pub score: u32,
    pub level: u32,
    pub difficulty: Difficulty,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.dims = GridDims::new(0, 0);
        self.avatar = Pos::default();
        self.direction = Direction::default();
        self.danger_zones.clear();
        self.rescue_targets.clear();
        self.lives = 0;
        self.score = 0;
        self.level = 0;
        self.difficulty = Difficulty {
            horizontal_us: 0,
            vertical_us: 0,
        };
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            dims: GridDims::new(0, 0),
            avatar: Pos::default(),
            direction: Direction::default(),
            danger_zones: Vec::new(),
            rescue_targets: Vec::new(),
            lives: 0,
            score: 0,
            level: 0,
            difficulty: Difficulty {
                horizontal_us: 0,
                vertical_us: 0,
            },
            game_over: false,
        };
        s.clear();
        s
    }
}
