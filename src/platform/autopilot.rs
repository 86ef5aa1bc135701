//! Built-in pilot for headless runs
//!
//! Plays by looking at the previous frame's draw calls only, the same view a
//! human has.

use super::InputSource;
use crate::consts::{COLOR_BACKGROUND, OBSTACLE_WIDTH};
use crate::renderer::{DrawCmd, DrawList};
use crate::scene::score::RESTART_PROMPT;
use crate::scene::start::PROMPT;
use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    prev_y: Option<i32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical center of the next gap the ball has not cleared yet
    fn target_y(view: &DrawList, ball_x: i32, ball_r: i32) -> Option<i32> {
        view.cmds
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCmd::Rect { x, y, w, h, color }
                    if color == COLOR_BACKGROUND && w == OBSTACLE_WIDTH && x + w > ball_x - ball_r =>
                {
                    Some((x, y + h / 2))
                }
                _ => None,
            })
            .min_by_key(|(x, _)| *x)
            .map(|(_, center)| center)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, _frame: u64, last_frame: &DrawList) -> TickInput {
        if last_frame.find_text(RESTART_PROMPT).is_some() {
            self.prev_y = None;
            return TickInput {
                jump: false,
                restart: true,
            };
        }
        if last_frame.find_text(PROMPT).is_some() {
            return TickInput {
                jump: true,
                restart: false,
            };
        }

        let Some((x, y, r)) = last_frame.cmds.iter().find_map(|cmd| match *cmd {
            DrawCmd::Circ { x, y, r, .. } => Some((x, y, r)),
            _ => None,
        }) else {
            return TickInput::default();
        };

        let target = Self::target_y(last_frame, x, r).unwrap_or(y);
        let falling = self.prev_y.is_none_or(|prev| y >= prev);
        self.prev_y = Some(y);

        TickInput {
            jump: y > target && falling,
            restart: false,
        }
    }
}
