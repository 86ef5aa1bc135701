//! Gap Hop - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic play simulation (avatar, obstacles, collisions)
//! - `scene`: Start/Play/Score scene state machine
//! - `renderer`: Drawing sink abstraction and a recording implementation
//! - `platform`: Frame driver and input sources
//! - `persistence`: Plain-text best-score file
//! - `highscores`: Best-score tracking on top of a storage backend
//! - `settings`: JSON-backed runtime settings

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use highscores::{BestScore, ScoreStorage};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window caption
    pub const CAPTION: &str = "Ping Pong";

    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: i32 = 64;
    pub const SCREEN_HEIGHT: i32 = 96;

    /// Nominal frame rate of the driver
    pub const FPS: u32 = 60;
    /// Motion only advances on frames divisible by this
    pub const MOTION_DIVISOR: u64 = 3;

    /// Avatar defaults
    pub const AVATAR_SIZE: i32 = 8;
    pub const AVATAR_RADIUS: i32 = 4;
    pub const JUMP_VELOCITY: i32 = -4;
    pub const GRAVITY: i32 = 1;

    /// Gap heights span `MIN_GAP_HEIGHT..=MAX_GAP_HEIGHT`, sized from the jump arc
    pub const MIN_GAP_HEIGHT: i32 = JUMP_VELOCITY.abs() * 6;
    pub const MAX_GAP_HEIGHT: i32 = MIN_GAP_HEIGHT + JUMP_VELOCITY.abs() / 2;
    /// Shortest screen that still fits the tallest gap
    pub const MIN_SCREEN_HEIGHT: i32 = MAX_GAP_HEIGHT;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: i32 = 12;

    /// Palette indices (16-color palette)
    pub const PALETTE_SIZE: u8 = 16;
    pub const COLOR_BACKGROUND: u8 = 0;
    pub const COLOR_COUNTER: u8 = 3;
    pub const COLOR_PANEL: u8 = 4;
    pub const COLOR_AVATAR: u8 = 7;
    pub const COLOR_TEXT: u8 = 7;
    pub const COLOR_OBSTACLE: u8 = 10;

    /// Width of one glyph of the built-in font
    pub const GLYPH_WIDTH: i32 = 4;
}

/// Immutable screen bounds handed to every component that needs them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    width: i32,
    height: i32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: consts::SCREEN_WIDTH,
            height: consts::SCREEN_HEIGHT,
        }
    }
}

impl Screen {
    /// Custom bounds. `None` unless the width is positive and the height
    /// fits the tallest gap (`consts::MIN_SCREEN_HEIGHT`).
    pub fn new(width: i32, height: i32) -> Option<Self> {
        (width > 0 && height >= consts::MIN_SCREEN_HEIGHT).then_some(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center_x(&self) -> i32 {
        self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.height / 2
    }
}

/// True on frames where gated motion advances
#[inline]
pub fn is_motion_frame(frame: u64) -> bool {
    frame % consts::MOTION_DIVISOR == 0
}

/// Pixel width of a string in the built-in font
#[inline]
pub fn text_width(s: &str) -> i32 {
    s.chars().count() as i32 * consts::GLYPH_WIDTH
}
