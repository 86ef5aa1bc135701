//! Result panel shown after a run

use super::{Payload, Scene, SceneId, Transition};
use crate::Screen;
use crate::consts::{COLOR_PANEL, COLOR_TEXT, GLYPH_WIDTH};
use crate::highscores::BestScore;
use crate::renderer::Canvas;
use crate::sim::TickInput;

pub const RESTART_PROMPT: &str = "Push R key";

/// Shows this run's count next to the best and waits for a restart
#[derive(Debug)]
pub struct ScoreScene {
    screen: Screen,
    best: BestScore,
    now: u32,
}

impl ScoreScene {
    pub fn new(screen: Screen, best: BestScore) -> Self {
        Self {
            screen,
            best,
            now: 0,
        }
    }

    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn best(&self) -> u32 {
        self.best.score()
    }

    /// Shift that right-aligns the current count under the best
    fn right_align(&self) -> i32 {
        let best_digits = self.best.score().to_string().len() as i32;
        let now_digits = self.now.to_string().len() as i32;
        (best_digits - now_digits) * GLYPH_WIDTH
    }
}

impl Scene for ScoreScene {
    fn init(&mut self, payload: Option<Payload>) {
        self.now = match payload {
            Some(Payload::FinalCount(count)) => count,
            None => {
                log::warn!("Score scene entered without a final count");
                0
            }
        };
        self.best.submit(self.now);
    }

    fn update(&mut self, _frame: u64, input: &TickInput) -> Transition {
        if input.restart {
            Transition::To(SceneId::Play, None)
        } else {
            Transition::Stay
        }
    }

    /// Drawn over the last play frame, no clear
    fn draw(&self, canvas: &mut dyn Canvas) {
        let x = self.screen.center_x() - 4 * 16 / 2 + 2;
        let y = self.screen.center_y() - 8 / 2 - 8 * 4 / 2;
        let value_x = x + 2 + 6 * 4;

        canvas.rect(x, y, self.screen.width(), 8 * 4 + 2, COLOR_PANEL);
        canvas.text(x + 2, y + 2, "SCORE", COLOR_TEXT);
        canvas.text(
            value_x + self.right_align(),
            y + 2,
            &self.now.to_string(),
            COLOR_TEXT,
        );
        canvas.text(x + 2, y + 2 + 8, "BEST", COLOR_TEXT);
        canvas.text(value_x, y + 2 + 8, &self.best.score().to_string(), COLOR_TEXT);
        canvas.text(x + 2, y + 2 + 24, RESTART_PROMPT, COLOR_TEXT);
    }
}
