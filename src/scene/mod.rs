//! Scene state machine
//!
//! Three scenes cycle forever: Start -> Play -> Score -> Play -> ...
//! Every scene is built once up front and re-entered through `init`.

pub mod play;
pub mod score;
pub mod start;

pub use play::PlayScene;
pub use score::ScoreScene;
pub use start::StartScene;

use crate::Screen;
use crate::highscores::BestScore;
use crate::renderer::Canvas;
use crate::sim::TickInput;

/// Scene identifiers, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Play,
    Score,
}

impl SceneId {
    pub const ALL: [SceneId; 3] = [SceneId::Start, SceneId::Play, SceneId::Score];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Start => "Start",
            SceneId::Play => "Play",
            SceneId::Score => "Score",
        }
    }
}

/// Data handed to the next scene's `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Obstacles passed in the run that just ended
    FinalCount(u32),
}

/// Result of a scene update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    To(SceneId, Option<Payload>),
}

/// Common scene capability
pub trait Scene {
    /// Called on every entry, with whatever the previous scene handed over
    fn init(&mut self, payload: Option<Payload>);
    fn update(&mut self, frame: u64, input: &TickInput) -> Transition;
    /// Pure read of the scene state
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Owns one instance per scene and the active scene id
pub struct SceneManager {
    scenes: [Box<dyn Scene>; 3],
    now: SceneId,
}

impl SceneManager {
    /// Build the standard scene table, starting on the title screen
    pub fn new(screen: Screen, best: BestScore, seed: u64) -> Self {
        let scenes: [Box<dyn Scene>; 3] = [
            Box::new(StartScene::new(screen)),
            Box::new(PlayScene::new(screen, seed)),
            Box::new(ScoreScene::new(screen, best)),
        ];
        Self::with_scenes(scenes)
    }

    /// Build from an explicit table indexed by `SceneId`
    pub fn with_scenes(scenes: [Box<dyn Scene>; 3]) -> Self {
        Self {
            scenes,
            now: SceneId::Start,
        }
    }

    pub fn current(&self) -> SceneId {
        self.now
    }

    /// Update the active scene and apply any transition it asks for
    pub fn update(&mut self, frame: u64, input: &TickInput) {
        match self.scenes[self.now.index()].update(frame, input) {
            Transition::Stay => {}
            Transition::To(next, payload) => {
                log::info!(
                    "Scene {} -> {} ({:?})",
                    self.now.as_str(),
                    next.as_str(),
                    payload
                );
                self.now = next;
                self.scenes[next.index()].init(payload);
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.scenes[self.now.index()].draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_HEIGHT;
    use crate::highscores::MemoryStore;
    use crate::renderer::DrawList;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Scene that replays scripted transitions and logs calls
    struct Scripted {
        name: &'static str,
        script: Vec<Transition>,
        log: Log,
    }

    impl Scene for Scripted {
        fn init(&mut self, payload: Option<Payload>) {
            self.log
                .borrow_mut()
                .push(format!("{}.init({:?})", self.name, payload));
        }

        fn update(&mut self, _frame: u64, _input: &TickInput) -> Transition {
            self.log.borrow_mut().push(format!("{}.update", self.name));
            if self.script.is_empty() {
                Transition::Stay
            } else {
                self.script.remove(0)
            }
        }

        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.text(0, 0, self.name, 7);
        }
    }

    fn scripted(name: &'static str, script: Vec<Transition>, log: &Log) -> Box<dyn Scene> {
        Box::new(Scripted {
            name,
            script,
            log: log.clone(),
        })
    }

    #[test]
    fn test_dispatch_and_payload() {
        let log: Log = Rc::default();
        let mut manager = SceneManager::with_scenes([
            scripted(
                "start",
                vec![Transition::Stay, Transition::To(SceneId::Play, None)],
                &log,
            ),
            scripted(
                "play",
                vec![Transition::To(
                    SceneId::Score,
                    Some(Payload::FinalCount(9)),
                )],
                &log,
            ),
            scripted("score", vec![Transition::To(SceneId::Play, None)], &log),
        ]);
        assert_eq!(manager.current(), SceneId::Start);

        manager.update(0, &TickInput::default());
        assert_eq!(manager.current(), SceneId::Start);
        manager.update(1, &TickInput::default());
        assert_eq!(manager.current(), SceneId::Play);
        manager.update(2, &TickInput::default());
        assert_eq!(manager.current(), SceneId::Score);
        manager.update(3, &TickInput::default());
        assert_eq!(manager.current(), SceneId::Play);

        assert_eq!(
            *log.borrow(),
            vec![
                "start.update",
                "start.update",
                "play.init(None)",
                "play.update",
                "score.init(Some(FinalCount(9)))",
                "score.update",
                "play.init(None)",
            ]
        );
    }

    #[test]
    fn test_draw_goes_to_active_scene() {
        let log: Log = Rc::default();
        let mut manager = SceneManager::with_scenes([
            scripted("start", vec![Transition::To(SceneId::Score, None)], &log),
            scripted("play", vec![], &log),
            scripted("score", vec![], &log),
        ]);
        let mut list = DrawList::new();
        manager.draw(&mut list);
        manager.update(0, &TickInput::default());
        manager.draw(&mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["start", "score"]);
    }

    #[test]
    fn test_full_cycle_with_real_scenes() {
        let mut manager = SceneManager::new(
            Screen::default(),
            BestScore::load(Box::new(MemoryStore::default())),
            2024,
        );
        let idle = TickInput::default();
        let jump = TickInput {
            jump: true,
            restart: false,
        };
        let restart = TickInput {
            jump: false,
            restart: true,
        };

        manager.update(0, &idle);
        assert_eq!(manager.current(), SceneId::Start);
        manager.update(1, &jump);
        assert_eq!(manager.current(), SceneId::Play);

        // Fall out of the screen
        let mut frame = 2;
        while manager.current() == SceneId::Play {
            manager.update(frame, &idle);
            frame += 1;
            assert!(frame < 10_000, "play never ended");
        }
        assert_eq!(manager.current(), SceneId::Score);

        // Score ignores jump, restarts on R
        manager.update(frame, &jump);
        assert_eq!(manager.current(), SceneId::Score);
        manager.update(frame + 1, &restart);
        assert_eq!(manager.current(), SceneId::Play);

        // Fresh run shows a zero counter
        let mut list = DrawList::new();
        manager.draw(&mut list);
        assert!(list.find_text("0").is_some());
        assert!(list.find_text("Game Over").is_none());
    }

    #[test]
    fn test_restart_after_scoring_run_starts_from_zero() {
        let screen = Screen::default();
        let mut play = PlayScene::new(screen, 31);
        let mut score = ScoreScene::new(
            screen,
            BestScore::load(Box::new(MemoryStore::default())),
        );

        // Wide-open walls and a hovering avatar rack up passes
        let mut frame = 0;
        while play.state().count() < 3 {
            for obstacle in &mut play.state_mut().obstacles {
                obstacle.set_gap(0, SCREEN_HEIGHT);
            }
            let avatar = &play.state().avatar;
            let input = TickInput {
                jump: avatar.y() > SCREEN_HEIGHT / 2 && avatar.vel_y() >= 0,
                restart: false,
            };
            assert_eq!(play.update(frame, &input), Transition::Stay);
            frame += 1;
            assert!(frame < 5_000, "no passes scored");
        }

        // Drop out of the screen to end the run
        play.state_mut().avatar.set_y(SCREEN_HEIGHT + 10);
        assert_eq!(play.update(frame, &TickInput::default()), Transition::Stay);
        let final_count = match play.update(frame + 1, &TickInput::default()) {
            Transition::To(SceneId::Score, Some(Payload::FinalCount(count))) => count,
            other => panic!("expected score transition, got {:?}", other),
        };
        assert!(final_count >= 3);

        score.init(Some(Payload::FinalCount(final_count)));
        assert_eq!(score.now(), final_count);
        assert_eq!(score.best(), final_count);

        let restart = TickInput {
            jump: false,
            restart: true,
        };
        assert_eq!(
            score.update(frame + 2, &restart),
            Transition::To(SceneId::Play, None)
        );
        play.init(None);
        assert_eq!(play.state().count(), 0);
        assert!(!play.state().is_game_over());

        let mut list = DrawList::new();
        play.draw(&mut list);
        assert!(list.find_text("0").is_some());
        assert!(list.find_text(&final_count.to_string()).is_none());
    }

    #[test]
    fn test_scene_ids_index_in_declaration_order() {
        for (i, id) in SceneId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
