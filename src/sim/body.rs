//! Positional record shared by every drawable actor

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::PALETTE_SIZE;

/// Axis-aligned position, size and palette color of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pos: IVec2,
    size: IVec2,
    color: u8,
}

impl Body {
    /// Create a body; an out-of-palette color falls back to 0
    pub fn new(pos: IVec2, size: IVec2, color: u8) -> Self {
        let mut body = Self {
            pos,
            size,
            color: 0,
        };
        body.set_color(color);
        body
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn set_x(&mut self, x: i32) {
        self.pos.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.pos.y = y;
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Set the palette color.
    ///
    /// Values outside `[0, 16)` are ignored and the current color is kept.
    /// Returns whether the write was accepted.
    pub fn set_color(&mut self, color: u8) -> bool {
        if color < PALETTE_SIZE {
            self.color = color;
            true
        } else {
            false
        }
    }
}
