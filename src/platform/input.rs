//! Keyboard/touch codes to session intents

use crate::sim::{Difficulty, GamePhase, Intent};

/// Map a DOM `KeyboardEvent.code` to an intent for the current phase.
///
/// The same key starts, jumps and restarts depending on phase, so the caller
/// never has to look at the phase itself. Touch/click should be forwarded as
/// `"Space"`.
pub fn intent_for_key(code: &str, phase: GamePhase, difficulty: Difficulty) -> Option<Intent> {
    match code {
        "Space" | "ArrowUp" | "KeyW" => match phase {
            GamePhase::Idle => Some(Intent::Start(difficulty)),
            GamePhase::Running => Some(Intent::Jump),
            GamePhase::Ended => Some(Intent::Restart),
            GamePhase::Paused => None,
        },
        "Escape" | "KeyP" => match phase {
            GamePhase::Running | GamePhase::Paused => Some(Intent::PauseToggle),
            _ => None,
        },
        "KeyR" => (phase == GamePhase::Ended).then_some(Intent::Restart),
        "KeyH" => match phase {
            GamePhase::Paused | GamePhase::Ended => Some(Intent::GoHome),
            _ => None,
        },
        _ => None,
    }
}
