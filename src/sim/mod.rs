//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Motion driven by the frame counter only, never wall-clock time
//! - Seeded RNG only
//! - Collisions read last frame's state before anything moves
//! - No rendering or platform dependencies

pub mod avatar;
pub mod body;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use body::Body;
pub use collision::{Collision, avatar_hits_wall, avatar_out_of_bounds};
pub use obstacle::Obstacle;
pub use state::{OBSTACLE_COUNT, PlayState};
pub use tick::{TickInput, TickOutcome, tick};
