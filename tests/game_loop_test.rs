//! Game loop tests with in-memory collaborators.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use robo_rescue::core::{Avatar, GameConfig, GameState, GridDims, Layout};
use robo_rescue::engine::{GameLoop, InputSource, Pacer, Renderer, RunOutcome};
use robo_rescue::types::{Direction, Pos, ScoreTier};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Present,
    Alert,
    StartBanner,
    GameOverBanner { score: u32, tier: ScoreTier, seconds_left: u32 },
    Hud { lives: u32, score: u32, level: u32 },
}

#[derive(Default)]
struct FakeRenderer {
    size: (u16, u16),
    calls: Vec<Call>,
}

impl FakeRenderer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            size: (width, height),
            calls: Vec::new(),
        }
    }

    fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| f(c)).count()
    }

    fn countdown(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::GameOverBanner { seconds_left, .. } => Some(*seconds_left),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for FakeRenderer {
    fn dimensions(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }
    fn clear(&mut self) {}
    fn draw_border(&mut self) {}
    fn draw_avatar(&mut self, _pos: Pos, _direction: Direction) {}
    fn draw_danger_zones(&mut self, _cells: &[Pos]) {}
    fn draw_rescue_targets(&mut self, _cells: &[Pos]) {}
    fn draw_hud(&mut self, lives: u32, score: u32, level: u32) {
        self.calls.push(Call::Hud { lives, score, level });
    }
    fn present(&mut self) -> Result<()> {
        self.calls.push(Call::Present);
        Ok(())
    }
    fn alert(&mut self) -> Result<()> {
        self.calls.push(Call::Alert);
        Ok(())
    }
    fn draw_start_banner(&mut self) {
        self.calls.push(Call::StartBanner);
    }
    fn draw_game_over_banner(&mut self, score: u32, tier: ScoreTier, seconds_left: u32) {
        self.calls.push(Call::GameOverBanner {
            score,
            tier,
            seconds_left,
        });
    }
}

/// Replays scripted directions, then repeats `fallback`.
struct ScriptedInput {
    script: VecDeque<Option<Direction>>,
    fallback: Option<Direction>,
    quit_on_poll: Option<usize>,
    polls: usize,
    waited: bool,
}

impl ScriptedInput {
    fn steering(fallback: Direction) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Some(fallback),
            quit_on_poll: None,
            polls: 0,
            waited: false,
        }
    }

    fn quitting_on(poll: usize) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: None,
            quit_on_poll: Some(poll),
            polls: 0,
            waited: false,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_direction(&mut self) -> Result<Option<Direction>> {
        Ok(self.script.pop_front().unwrap_or(self.fallback))
    }

    fn poll_quit(&mut self) -> Result<bool> {
        self.polls += 1;
        Ok(self.quit_on_poll == Some(self.polls))
    }

    fn wait_for_key(&mut self) -> Result<()> {
        self.waited = true;
        Ok(())
    }
}

#[derive(Default)]
struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

fn top_row_game() -> GameState {
    let layout = Layout {
        avatar: Avatar::new(Pos::new(30, 2), Direction::Up),
        danger_zones: vec![Pos::new(10, 16), Pos::new(70, 17)],
        rescue_targets: vec![
            Pos::new(21, 10),
            Pos::new(30, 6),
            Pos::new(40, 7),
            Pos::new(50, 8),
            Pos::new(60, 9),
        ],
    };
    GameState::with_layout(GameConfig::default(), GridDims::new(80, 24), 5, layout).unwrap()
}

#[test]
fn test_quit_ends_run_without_game_over_screen() {
    let mut game = GameLoop::new(
        FakeRenderer::new(80, 24),
        ScriptedInput::quitting_on(1),
        RecordingPacer::default(),
    );

    let outcome = game.play(GameConfig::default(), 7).unwrap();
    assert_eq!(outcome, RunOutcome::Quit { score: 0, level: 1 });

    let (renderer, input, pacer) = game.into_parts();
    assert!(input.waited);
    assert_eq!(renderer.calls, vec![Call::StartBanner, Call::Present]);
    assert!(pacer.pauses.is_empty());
}

#[test]
fn test_quit_mid_run_keeps_score() {
    let mut game = GameLoop::new(
        FakeRenderer::new(80, 24),
        ScriptedInput::quitting_on(3),
        RecordingPacer::default(),
    );
    let mut state = top_row_game().with_counters(3, 30, 1);

    let outcome = game.run(&mut state).unwrap();
    assert_eq!(outcome, RunOutcome::Quit { score: 30, level: 1 });
    assert!(!outcome.is_game_over());
    assert_eq!(state.ticks(), 2);
}

#[test]
fn test_three_wall_hits_end_in_game_over() {
    let mut game = GameLoop::new(
        FakeRenderer::new(80, 24),
        ScriptedInput::steering(Direction::Up),
        RecordingPacer::default(),
    );
    let mut state = top_row_game();

    let outcome = game.run(&mut state).unwrap();
    assert_eq!(outcome, RunOutcome::GameOver { score: 0, level: 1 });
    assert_eq!(state.ticks(), 3);

    let renderer = game.renderer();
    assert_eq!(renderer.count(|c| *c == Call::Alert), 3);
    assert_eq!(
        renderer.count(|c| matches!(c, Call::Hud { .. })),
        3,
        "one frame per tick"
    );
    assert_eq!(
        game.pacer().pauses,
        vec![Duration::from_micros(120_000); 3],
        "vertical delay while heading up"
    );
}

#[test]
fn test_horizontal_heading_uses_horizontal_delay() {
    let mut input = ScriptedInput::quitting_on(2);
    input.script.push_back(Some(Direction::Left));
    let mut game = GameLoop::new(FakeRenderer::new(80, 24), input, RecordingPacer::default());
    let mut state = top_row_game();

    game.run(&mut state).unwrap();
    assert_eq!(game.pacer().pauses, vec![Duration::from_micros(70_000)]);
    assert_eq!(state.avatar().pos, Pos::new(29, 2));
}

#[test]
fn test_play_until_game_over_counts_down() {
    let mut game = GameLoop::new(
        FakeRenderer::new(80, 24),
        ScriptedInput::steering(Direction::Up),
        RecordingPacer::default(),
    );

    let outcome = game.play(GameConfig::default(), 12345).unwrap();
    assert!(outcome.is_game_over());

    let (renderer, _, pacer) = game.into_parts();
    assert_eq!(renderer.calls.first(), Some(&Call::StartBanner));
    assert_eq!(renderer.countdown(), vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(renderer.count(|c| *c == Call::Alert), 3);

    let tier = ScoreTier::for_score(outcome.score());
    assert!(renderer.calls.iter().all(|c| match c {
        Call::GameOverBanner { tier: t, score, .. } => *t == tier && *score == outcome.score(),
        _ => true,
    }));

    let tail = &pacer.pauses[pacer.pauses.len() - 6..];
    assert!(tail.iter().all(|d| *d == Duration::from_secs(1)));
}

#[test]
fn test_too_small_terminal_fails_before_start_screen() {
    let mut game = GameLoop::new(
        FakeRenderer::new(10, 10),
        ScriptedInput::quitting_on(1),
        RecordingPacer::default(),
    );

    assert!(game.play(GameConfig::default(), 1).is_err());
    assert!(game.renderer().calls.is_empty());
    assert!(!game.input().waited);
}
