//! The game itself

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Payload, Scene, SceneId, Transition};
use crate::consts::*;
use crate::renderer::Canvas;
use crate::renderer::shapes::{draw_avatar, draw_obstacle};
use crate::sim::{PlayState, TickInput, TickOutcome, tick};
use crate::{Screen, text_width};

pub const GAME_OVER_TEXT: &str = "Game Over";

/// Runs one `PlayState` per entry
#[derive(Debug)]
pub struct PlayScene {
    screen: Screen,
    /// Hands each new run its own seed
    seeds: Pcg32,
    state: PlayState,
}

impl PlayScene {
    pub fn new(screen: Screen, seed: u64) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = PlayState::new(screen, seeds.random());
        Self {
            screen,
            seeds,
            state,
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut PlayState {
        &mut self.state
    }
}

impl Scene for PlayScene {
    /// Always a fresh run; any payload is ignored
    fn init(&mut self, payload: Option<Payload>) {
        if payload.is_some() {
            log::warn!("Play scene ignores payload {:?}", payload);
        }
        self.state = PlayState::new(self.screen, self.seeds.random());
        log::info!("New run, seed {}", self.state.seed);
    }

    fn update(&mut self, frame: u64, input: &TickInput) -> Transition {
        match tick(&mut self.state, frame, input) {
            TickOutcome::Running => Transition::Stay,
            TickOutcome::Finished { count } => {
                Transition::To(SceneId::Score, Some(Payload::FinalCount(count)))
            }
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.cls(COLOR_BACKGROUND);
        for obstacle in &self.state.obstacles {
            draw_obstacle(canvas, obstacle);
        }
        draw_avatar(canvas, &self.state.avatar);

        let count = self.state.count().to_string();
        canvas.text(
            self.screen.center_x() - text_width(&count) / 2,
            8,
            &count,
            COLOR_COUNTER,
        );

        if self.state.is_game_over() {
            canvas.text(
                self.screen.center_x() - text_width(GAME_OVER_TEXT) / 2,
                self.screen.center_y(),
                GAME_OVER_TEXT,
                COLOR_TEXT,
            );
        }
    }
}
