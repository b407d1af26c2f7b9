//! Terminal robo-rescue runner (default binary).
//!
//! Steer the robot with the arrow keys (or hjkl / wasd), rescue people and
//! stay out of the danger zones. `q` quits.

use anyhow::Result;
use tracing::info;

use robo_rescue::core::{clock_seed, GameConfig};
use robo_rescue::engine::{GameLoop, RunOutcome, ThreadPacer};
use robo_rescue::input::TerminalInput;
use robo_rescue::logging;
use robo_rescue::term::TerminalScreen;

fn main() -> Result<()> {
    logging::init()?;

    let mut screen = TerminalScreen::new()?;
    screen.enter()?;

    let mut game = GameLoop::new(screen, TerminalInput::new(), ThreadPacer);
    let result = game.play(GameConfig::default(), clock_seed());

    // Always try to restore terminal state.
    let (mut screen, _, _) = game.into_parts();
    let _ = screen.exit();

    let outcome = result?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Quit { score, level } => info!(score, level, "player quit"),
        RunOutcome::GameOver { score, level } => info!(score, level, "game over"),
    }
}
