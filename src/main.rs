//! FallDown entry point
//!
//! The browser build is driven from JS through `falldown::web`. Natively this
//! runs a headless demo: the autopilot plays one run at 60 Hz and the best
//! score is kept in a JSON file.
//!
//! Usage: `falldown [WIDTH HEIGHT [SEED]]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = demo::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is falldown::web::init, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::error::Error;

    use falldown::persistence::FileStore;
    use falldown::platform::InputCommand;
    use falldown::session::{Screen, Session};
    use falldown::sim::{Direction, GameEvent, RngSource, autopilot};

    /// Frame interval of a 60 Hz display (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop the demo after this much simulated time even if the ball survives
    const MAX_DEMO_SECS: f64 = 300.0;
    const STORE_FILE: &str = "falldown-save.json";

    fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> Result<T, String> {
        match args.get(i) {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("invalid argument {:?}", raw)),
            None => Ok(default),
        }
    }

    pub fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
        let width: f32 = parse_arg(&args, 0, 375.0)?;
        let height: f32 = parse_arg(&args, 1, 667.0)?;
        let seed: Option<u64> = args.get(2).map(|s| s.parse()).transpose()?;

        let store = FileStore::open_or_empty(STORE_FILE);
        log::info!("FallDown (native) {}x{}, store {}", width, height, store.path().display());

        let mut session = match seed {
            Some(seed) => Session::new(width, height, store, RngSource::seeded(seed))?,
            None => Session::new(width, height, store, RngSource::thread())?,
        };

        let mut now = 0.0;
        session.begin(now);
        let mut steering: Option<Direction> = None;

        while session.screen() == Screen::Playing && now < MAX_DEMO_SECS * 1000.0 {
            let engine = session.engine();
            let wanted = autopilot::steer(&engine.ball(), &engine.platforms());
            if wanted != steering {
                session.command(match wanted {
                    Some(direction) => InputCommand::Move(direction),
                    None => InputCommand::Stop,
                });
                steering = wanted;
            }

            now += FRAME_MS;
            for event in session.frame(now) {
                if let GameEvent::LevelUp { level } = event {
                    log::info!("Level {} (speed {:.2})", level, session.engine().state().speed);
                }
            }
        }

        match session.summary() {
            Some(summary) => {
                let note = if summary.new_high_score { " - new best!" } else { "" };
                println!(
                    "Survived {}s (best {}){}",
                    summary.score, summary.high_score, note
                );
            }
            None => println!(
                "Demo stopped after {}s without a game over",
                session.engine().state().score
            ),
        }
        Ok(())
    }
}
