//! Collision checks for the avatar against the screen and the walls
//!
//! Both checks are pure reads of the current positions; the caller runs them
//! before applying this frame's motion.

use super::avatar::Avatar;
use super::obstacle::Obstacle;
use crate::Screen;

/// Which check ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Avatar center left the vertical screen range
    Bounds,
    /// Avatar touched wall material above or below a gap
    Wall,
}

/// Avatar center outside `[0, screen.height()]`
pub fn avatar_out_of_bounds(avatar: &Avatar, screen: Screen) -> bool {
    avatar.y() < 0 || screen.height() < avatar.y()
}

/// Avatar has reached the wall's leading edge and its circle is not strictly
/// inside the gap.
pub fn avatar_hits_wall(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    obstacle.x() <= avatar.x()
        && (avatar.top() <= obstacle.gap_y() || obstacle.gap_bottom() <= avatar.bottom())
}

/// Run every check; bounds take precedence in the report
pub fn detect(avatar: &Avatar, obstacles: &[Obstacle], screen: Screen) -> Option<Collision> {
    if avatar_out_of_bounds(avatar, screen) {
        return Some(Collision::Bounds);
    }
    if obstacles.iter().any(|o| avatar_hits_wall(avatar, o)) {
        return Some(Collision::Wall);
    }
    None
}
