//! Frame-by-frame simulation step

use super::collision;
use super::state::PlayState;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Hop (space)
    pub jump: bool,
    /// Restart from the score screen (R)
    pub restart: bool,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run continues
    Running,
    /// Run had already ended before this frame; nothing was advanced
    Finished { count: u32 },
}

/// Advance the run by one frame.
///
/// Collisions are checked against last frame's positions, then the avatar
/// and walls move. The frame that detects a collision still moves; the one
/// after reports `Finished` without touching the state.
pub fn tick(state: &mut PlayState, frame: u64, input: &TickInput) -> TickOutcome {
    if state.is_game_over() {
        return TickOutcome::Finished {
            count: state.count(),
        };
    }

    if let Some(cause) = collision::detect(&state.avatar, &state.obstacles, state.screen) {
        state.end(cause);
    }

    state.avatar.update(frame, input.jump);

    for obstacle in &mut state.obstacles {
        if obstacle.update(frame, &mut state.rng) {
            state.avatar.countup();
            log::debug!("Passed obstacle, count {}", state.avatar.count());
        }
    }

    state.time_ticks += 1;
    TickOutcome::Running
}
