//! The player-controlled ball

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;
use crate::{Screen, is_motion_frame};

/// The avatar: a circle that falls under gravity and hops on input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub body: Body,
    radius: i32,
    vel_y: i32,
    /// Obstacles passed in this run
    count: u32,
}

impl Avatar {
    /// Spawn at rest, half its width from the left edge, at mid-height
    pub fn new(screen: Screen) -> Self {
        let size = IVec2::splat(AVATAR_SIZE);
        Self {
            body: Body::new(
                IVec2::new(AVATAR_SIZE / 2, screen.center_y()),
                size,
                COLOR_AVATAR,
            ),
            radius: AVATAR_RADIUS,
            vel_y: 0,
            count: 0,
        }
    }

    pub fn x(&self) -> i32 {
        self.body.x()
    }

    pub fn y(&self) -> i32 {
        self.body.y()
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn vel_y(&self) -> i32 {
        self.vel_y
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Top of the collision circle
    pub fn top(&self) -> i32 {
        self.y() - self.radius
    }

    /// Bottom of the collision circle
    pub fn bottom(&self) -> i32 {
        self.y() + self.radius
    }

    /// Advance one frame. Motion only happens on every third frame: a jump
    /// replaces the velocity with the impulse, then gravity is added and the
    /// velocity applied.
    pub fn update(&mut self, frame: u64, jump: bool) {
        if !is_motion_frame(frame) {
            return;
        }
        if jump {
            self.vel_y = JUMP_VELOCITY;
        }
        self.vel_y += GRAVITY;
        self.body.set_y(self.body.y() + self.vel_y);
    }

    /// Credit one passed obstacle
    pub fn countup(&mut self) {
        self.count += 1;
    }

    #[cfg(test)]
    pub(crate) fn set_y(&mut self, y: i32) {
        self.body.set_y(y);
    }

    #[cfg(test)]
    pub(crate) fn set_vel_y(&mut self, vel_y: i32) {
        self.vel_y = vel_y;
    }
}
