//! Platform layer
//!
//! Handles the parts of the game that are not simulation:
//! - Frame clock (fixed-rate update then draw)
//! - Input sources
//!
//! A windowed backend plugs in by implementing `InputSource` and `Canvas`.

pub mod autopilot;

pub use autopilot::Autopilot;

use std::time::{Duration, Instant};

use crate::renderer::DrawList;
use crate::scene::SceneManager;
use crate::sim::TickInput;

/// Supplies the input for each frame.
///
/// `last_frame` is what was drawn on the previous frame.
pub trait InputSource {
    fn poll(&mut self, frame: u64, last_frame: &DrawList) -> TickInput;
}

/// Replays input from a fixed list of `(frame, input)` pairs
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: Vec<(u64, TickInput)>,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<(u64, TickInput)>) -> Self {
        events.sort_by_key(|(frame, _)| *frame);
        Self { events }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: u64, _last_frame: &DrawList) -> TickInput {
        self.events
            .iter()
            .find(|(f, _)| *f == frame)
            .map(|(_, input)| *input)
            .unwrap_or_default()
    }
}

/// Fixed-step frame driver: one update then one draw per frame
#[derive(Debug)]
pub struct FrameDriver {
    frame: u64,
    frame_time: Duration,
    /// Most recent frame's draw calls
    canvas: DrawList,
}

impl FrameDriver {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: 0,
            frame_time: Duration::from_secs(1) / fps.max(1),
            canvas: DrawList::new(),
        }
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn canvas(&self) -> &DrawList {
        &self.canvas
    }

    /// Run exactly one frame
    pub fn step(&mut self, scenes: &mut SceneManager, input: &mut dyn InputSource) {
        let tick_input = input.poll(self.frame, &self.canvas);
        scenes.update(self.frame, &tick_input);
        self.canvas.clear();
        scenes.draw(&mut self.canvas);
        self.frame += 1;
    }

    /// Run `frames` frames as fast as possible
    pub fn run(&mut self, scenes: &mut SceneManager, input: &mut dyn InputSource, frames: u64) {
        for _ in 0..frames {
            self.step(scenes, input);
        }
    }

    /// Run `frames` frames paced to the configured rate
    pub fn run_paced(
        &mut self,
        scenes: &mut SceneManager,
        input: &mut dyn InputSource,
        frames: u64,
    ) {
        let mut next = Instant::now();
        for _ in 0..frames {
            self.step(scenes, input);
            next += self.frame_time;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            } else {
                // Fell behind; don't try to catch up
                next = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Screen;
    use crate::highscores::{BestScore, MemoryStore};
    use crate::scene::SceneId;

    fn manager() -> SceneManager {
        SceneManager::new(
            Screen::default(),
            BestScore::load(Box::new(MemoryStore::default())),
            1,
        )
    }

    #[test]
    fn test_frame_counter_advances() {
        let mut scenes = manager();
        let mut input = ScriptedInput::default();
        let mut driver = FrameDriver::new(60);
        driver.run(&mut scenes, &mut input, 10);
        assert_eq!(driver.frame(), 10);
        assert_eq!(scenes.current(), SceneId::Start);
        assert!(driver.canvas().find_text("Push SPACE key !").is_some());
    }

    #[test]
    fn test_scripted_jump_starts_play() {
        let mut scenes = manager();
        let jump = TickInput {
            jump: true,
            restart: false,
        };
        let mut input = ScriptedInput::new(vec![(5, jump)]);
        let mut driver = FrameDriver::new(60);
        driver.run(&mut scenes, &mut input, 5);
        assert_eq!(scenes.current(), SceneId::Start);
        driver.step(&mut scenes, &mut input);
        assert_eq!(scenes.current(), SceneId::Play);
        // Draw happened after the transition
        assert!(matches!(
            driver.canvas().cmds.first(),
            Some(crate::renderer::DrawCmd::Cls { .. })
        ));
    }

    #[test]
    fn test_run_paced_short() {
        let mut scenes = manager();
        let mut input = ScriptedInput::default();
        let mut driver = FrameDriver::new(1000);
        driver.run_paced(&mut scenes, &mut input, 3);
        assert_eq!(driver.frame(), 3);
    }
}
