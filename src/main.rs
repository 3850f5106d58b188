//! Skyfall entry point
//!
//! Headless demo driver: runs the simulation at a synthetic 60 Hz clock with
//! the autopilot on input, until the pilot dies or the frame budget runs
//! out. A real presentation layer would swap in its own input provider and
//! render sink; the sim core is identical either way.

use std::path::Path;

use skyfall::assets::AssetGate;
use skyfall::consts::FRAME_INTERVAL_MS;
use skyfall::driver::{DemoPilot, FrameDriver, LogSink};
use skyfall::session::RunRecord;
use skyfall::sim::RunState;
use skyfall::{Session, Settings};

/// Demo runs per invocation (restart exercises the full lifecycle)
const DEMO_RUNS: u32 = 3;
/// Frame budget per run: two minutes of game time
const MAX_FRAMES_PER_RUN: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    let settings = Settings::load(Path::new("skyfall.json"));
    log::info!("skyfall demo, seed {seed}");

    let mut assets = if settings.sprites_enabled {
        AssetGate::for_sprites()
    } else {
        AssetGate::empty()
    };
    // Headless run: nothing to actually decode, complete the gate up front
    assets.mark_all_loaded();

    let mut driver = FrameDriver::new(seed);
    driver.start(&assets);

    let mut pilot = DemoPilot::default();
    let mut sink = LogSink::default();
    let mut session = Session::new();

    for run in 0..DEMO_RUNS {
        let mut frames = 0;
        while driver.run_state() == RunState::Running && frames < MAX_FRAMES_PER_RUN {
            pilot.aim(&driver.world().frame());
            driver.tick(FRAME_INTERVAL_MS, &pilot, &mut sink);
            frames += 1;
        }
        if driver.run_state() != RunState::Over {
            // Pilot outlived the frame budget; close this run out and stop,
            // since restart is only reachable from a finished run
            let frame = driver.world().frame();
            session.record(RunRecord {
                score: frame.score,
                survived_seconds: frame.elapsed_seconds,
            });
            log::info!("frame budget exhausted after {frames} frames, ending demo");
            break;
        }
        session.record_from_frame(&driver.world().frame());
        if run + 1 < DEMO_RUNS {
            driver.restart();
        }
    }

    match serde_json::to_string_pretty(&driver.world().frame()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot export failed: {err}"),
    }
    if let Some(best) = session.best() {
        println!(
            "best of {} run(s): {} kill(s), survived {}s",
            session.runs().len(),
            best.score,
            best.survived_seconds
        );
    }
}
