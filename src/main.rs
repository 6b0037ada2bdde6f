//! Brick Breaker native entry point
//!
//! Runs the game headlessly with the autopilot at the controls. A windowed
//! host plugs its own `Frontend` and `SystemClock` into `App` instead.

use brick_breaker::platform::{Autopilot, FixedClock, HeadlessFrontend};
use brick_breaker::{App, GamePhase, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::load_or_default(Settings::FILE_NAME);
    let playfield = settings.playfield();
    let clock = FixedClock::from_rate(settings.frame_rate);
    log::info!(
        "Headless run: {} frames at {} fps, seed {}",
        settings.frames,
        settings.frame_rate,
        settings.seed
    );

    let mut app = App::new(clock, playfield).with_max_frame_dt(settings.max_frame_dt);
    let mut frontend = HeadlessFrontend::new(playfield.center());
    let mut pilot = Autopilot::new(
        settings.seed,
        settings.autopilot_reaction_frames,
        settings.autopilot_fumble_chance,
        playfield.center(),
    );

    let mut rounds_cleared = 0u32;
    let mut last_phase = app.phase();
    for _ in 0..settings.frames {
        pilot.drive(&mut frontend);
        app.frame(&mut frontend);

        let phase = app.phase();
        if phase != last_phase {
            if phase == GamePhase::GameClear {
                rounds_cleared += 1;
            }
            last_phase = phase;
        }
    }

    match app.game().playing() {
        Some(round) => {
            log::info!(
                "Finished mid-round after {} frames: score {}, balls {}, bricks left {}",
                app.frame_count(),
                round.score.points,
                round.lives.remaining,
                round.bricks.alive_count()
            );
            if settings.snapshot {
                log::info!("Final round: {}", serde_json::to_string(round)?);
            }
        }
        None => log::info!(
            "Finished on {:?} after {} frames",
            app.phase(),
            app.frame_count()
        ),
    }
    log::info!("Rounds cleared: {}", rounds_cleared);

    Ok(())
}
