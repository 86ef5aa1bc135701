//! Scrolling walls with a single safe gap

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;
use crate::{Screen, is_motion_frame};

/// A full-height wall strip scrolling leftward, pierced by one safe gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    #[serde(skip)]
    screen: Screen,
    /// Top of the gap
    gap_y: i32,
    gap_h: i32,
}

impl Obstacle {
    /// Place a new obstacle at the right screen edge with a random gap.
    /// Initial placement is not a pass.
    pub fn new<R: Rng>(screen: Screen, rng: &mut R) -> Self {
        let mut obstacle = Self {
            body: Body::new(
                IVec2::new(screen.width(), 0),
                IVec2::new(OBSTACLE_WIDTH, screen.height()),
                COLOR_OBSTACLE,
            ),
            screen,
            gap_y: 0,
            gap_h: 0,
        };
        obstacle.roll_gap(rng);
        obstacle
    }

    pub fn x(&self) -> i32 {
        self.body.x()
    }

    pub fn set_x(&mut self, x: i32) {
        self.body.set_x(x);
    }

    pub fn gap_y(&self) -> i32 {
        self.gap_y
    }

    pub fn gap_h(&self) -> i32 {
        self.gap_h
    }

    /// Bottom of the gap (exclusive)
    pub fn gap_bottom(&self) -> i32 {
        self.gap_y + self.gap_h
    }

    /// Advance one frame. Returns true when the wall left the screen and was
    /// recycled to the right edge; the caller credits the pass.
    pub fn update<R: Rng>(&mut self, frame: u64, rng: &mut R) -> bool {
        if is_motion_frame(frame) {
            self.body.set_x(self.body.x() - 1);
        }
        if self.body.right() <= 0 {
            self.recycle(rng);
            return true;
        }
        false
    }

    fn recycle<R: Rng>(&mut self, rng: &mut R) {
        self.body.set_x(self.screen.width());
        self.roll_gap(rng);
        log::debug!("Obstacle recycled, gap {}+{}", self.gap_y, self.gap_h);
    }

    /// Gap height scales with the jump arc so every gap stays navigable
    fn roll_gap<R: Rng>(&mut self, rng: &mut R) {
        self.gap_h = rng.random_range(MIN_GAP_HEIGHT..=MAX_GAP_HEIGHT);
        self.gap_y = rng.random_range(0..=(self.screen.height() - self.gap_h));
    }

    #[cfg(test)]
    pub(crate) fn set_gap(&mut self, gap_y: i32, gap_h: i32) {
        self.gap_y = gap_y;
        self.gap_h = gap_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_at_right_edge() {
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacle = Obstacle::new(Screen::default(), &mut rng);
        assert_eq!(obstacle.x(), SCREEN_WIDTH);
        assert_eq!(obstacle.body.y(), 0);
        assert_eq!(obstacle.body.height(), SCREEN_HEIGHT);
        assert_eq!(obstacle.body.width(), OBSTACLE_WIDTH);
    }

    #[test]
    fn test_scrolls_on_motion_frames_only() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut obstacle = Obstacle::new(Screen::default(), &mut rng);
        assert!(!obstacle.update(1, &mut rng));
        assert!(!obstacle.update(2, &mut rng));
        assert_eq!(obstacle.x(), SCREEN_WIDTH);
        assert!(!obstacle.update(3, &mut rng));
        assert_eq!(obstacle.x(), SCREEN_WIDTH - 1);
    }

    #[test]
    fn test_recycles_when_right_edge_crosses_left() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obstacle = Obstacle::new(Screen::default(), &mut rng);
        obstacle.set_x(-OBSTACLE_WIDTH + 1);
        assert!(!obstacle.update(1, &mut rng));
        assert!(obstacle.update(3, &mut rng));
        assert_eq!(obstacle.x(), SCREEN_WIDTH);
    }

    #[test]
    fn test_full_traversal_reports_one_pass() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut obstacle = Obstacle::new(Screen::default(), &mut rng);
        let traversal = (SCREEN_WIDTH + OBSTACLE_WIDTH) as u64 * 3;
        let passes = (1..=traversal)
            .filter(|&frame| obstacle.update(frame, &mut rng))
            .count();
        assert_eq!(passes, 1);
    }

    proptest! {
        #[test]
        fn gap_always_on_screen(seed in any::<u64>(), recycles in 1usize..20) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacle = Obstacle::new(Screen::default(), &mut rng);
            for _ in 0..recycles {
                obstacle.set_x(-OBSTACLE_WIDTH);
                prop_assert!(obstacle.update(1, &mut rng));
                prop_assert!(obstacle.gap_y() >= 0);
                prop_assert!(obstacle.gap_bottom() <= SCREEN_HEIGHT);
                prop_assert!((24..=26).contains(&obstacle.gap_h()));
            }
        }

        #[test]
        fn gap_fits_shortest_screen(seed in any::<u64>(), recycles in 1usize..20) {
            let screen = Screen::new(SCREEN_WIDTH, MIN_SCREEN_HEIGHT).unwrap();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacle = Obstacle::new(screen, &mut rng);
            for _ in 0..recycles {
                obstacle.set_x(-OBSTACLE_WIDTH);
                prop_assert!(obstacle.update(1, &mut rng));
                prop_assert!(obstacle.gap_y() >= 0);
                prop_assert!(obstacle.gap_bottom() <= MIN_SCREEN_HEIGHT);
            }
        }
    }
}
