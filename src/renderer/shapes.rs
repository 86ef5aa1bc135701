//! Drawing of simulation actors

use super::Canvas;
use crate::consts::COLOR_BACKGROUND;
use crate::sim::{Avatar, Obstacle};

/// Avatar as a filled circle
pub fn draw_avatar(canvas: &mut dyn Canvas, avatar: &Avatar) {
    canvas.circ(avatar.x(), avatar.y(), avatar.radius(), avatar.body.color());
}

/// Wall column with the gap painted back in the background color
pub fn draw_obstacle(canvas: &mut dyn Canvas, obstacle: &Obstacle) {
    let body = &obstacle.body;
    canvas.rect(body.x(), body.y(), body.width(), body.height(), body.color());
    canvas.rect(
        body.x(),
        obstacle.gap_y(),
        body.width(),
        obstacle.gap_h(),
        COLOR_BACKGROUND,
    );
}
