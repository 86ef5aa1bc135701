//! Play simulation state
//!
//! Everything one run needs lives here; a new run is a new `PlayState`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::avatar::Avatar;
use super::collision::Collision;
use super::obstacle::Obstacle;
use crate::Screen;
use crate::consts::OBSTACLE_WIDTH;

/// Number of walls in play at once
pub const OBSTACLE_COUNT: usize = 2;

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct PlayState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub screen: Screen,
    pub avatar: Avatar,
    /// Walls, spaced half a screen apart
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    /// Set once and never cleared for this run
    game_over: Option<Collision>,
    /// Frames simulated so far (not counting post-game-over frames)
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl PlayState {
    /// Create a fresh run with the given seed
    pub fn new(screen: Screen, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let avatar = Avatar::new(screen);
        let first = Obstacle::new(screen, &mut rng);
        let mut second = Obstacle::new(screen, &mut rng);
        second.set_x(first.x() + Self::obstacle_spacing(screen));

        Self {
            seed,
            screen,
            avatar,
            obstacles: [first, second],
            game_over: None,
            time_ticks: 0,
            rng,
        }
    }

    /// Horizontal distance between consecutive walls
    pub fn obstacle_spacing(screen: Screen) -> i32 {
        screen.width() / 2 + OBSTACLE_WIDTH / 2
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// What ended the run, if it has ended
    pub fn game_over_cause(&self) -> Option<Collision> {
        self.game_over
    }

    /// Obstacles passed so far
    pub fn count(&self) -> u32 {
        self.avatar.count()
    }

    /// Latch the game-over flag; the first cause wins
    pub(crate) fn end(&mut self, cause: Collision) {
        if self.game_over.is_none() {
            log::info!(
                "Run over ({:?}) after {} frames, count {}",
                cause,
                self.time_ticks,
                self.count()
            );
            self.game_over = Some(cause);
        }
    }
}
