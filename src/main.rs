//! Gap Hop entry point
//!
//! Runs the game headless: the frame driver records draw calls instead of
//! presenting them, and input comes from the built-in pilot.

use gap_hop::consts::CAPTION;
use gap_hop::persistence::{FileStore, beside_executable};
use gap_hop::platform::{Autopilot, FrameDriver, InputSource, ScriptedInput};
use gap_hop::scene::SceneManager;
use gap_hop::settings::SETTINGS_FILE_NAME;
use gap_hop::{BestScore, Screen, Settings};

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", CAPTION);

    let settings = Settings::load(&beside_executable(SETTINGS_FILE_NAME));
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed {}", seed);
    log::info!("Best score file {}", settings.best_score_path.display());

    let best = BestScore::load(Box::new(FileStore::new(&settings.best_score_path)));
    let mut scenes = SceneManager::new(Screen::default(), best, seed);

    let mut input: Box<dyn InputSource> = if settings.autopilot {
        Box::new(Autopilot::new())
    } else {
        Box::new(ScriptedInput::default())
    };

    let mut driver = FrameDriver::new(settings.effective_fps());
    if settings.realtime {
        driver.run_paced(&mut scenes, input.as_mut(), settings.demo_frames);
    } else {
        driver.run(&mut scenes, input.as_mut(), settings.demo_frames);
    }

    log::info!(
        "Stopped after {} frames in scene {}",
        driver.frame(),
        scenes.current().as_str()
    );
}
