//! Title screen

use super::{Payload, Scene, SceneId, Transition};
use crate::Screen;
use crate::consts::COLOR_TEXT;
use crate::renderer::Canvas;
use crate::renderer::shapes::draw_avatar;
use crate::sim::{Avatar, TickInput};

pub const PROMPT: &str = "Push SPACE key !";

/// Shows the avatar at rest and waits for a hop
#[derive(Debug)]
pub struct StartScene {
    screen: Screen,
    avatar: Avatar,
}

impl StartScene {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            avatar: Avatar::new(screen),
        }
    }
}

impl Scene for StartScene {
    fn init(&mut self, _payload: Option<Payload>) {}

    fn update(&mut self, _frame: u64, input: &TickInput) -> Transition {
        if input.jump {
            Transition::To(SceneId::Play, None)
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_avatar(canvas, &self.avatar);
        // Sixteen glyphs centered, two lines above mid-height
        canvas.text(
            self.screen.center_x() - 4 * 16 / 2,
            self.screen.center_y() - 8 * 2,
            PROMPT,
            COLOR_TEXT,
        );
    }
}
