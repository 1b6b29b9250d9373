//! `tankbattle`: drives a headless co-op session on the game loop thread and
//! logs the HUD once per second.

use std::process;
use std::time::{Duration, Instant};

use tankbattle_app::cli::{self, CliArgs};
use tankbattle_app::host;
use tankbattle_app::state::AppState;
use tankbattle_app::AppError;
use tankbattle_core::enums::MatchMode;
use tankbattle_core::input::{HostEvent, Key};
use tankbattle_core::state::GameStateSnapshot;

/// How often the scripted players pull their triggers.
const FIRE_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        cli::print_usage();
        return;
    }

    if let Err(e) = cli::parse_args(&args).and_then(|parsed| run(&parsed)) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let config = cli::sim_config(args)?;
    let state = AppState::new();
    host::start_simulation(&state, config)?;

    let result = drive_demo(&state, Duration::from_secs(args.seconds));
    host::stop_simulation(&state)?;
    result
}

fn key_down(state: &AppState, key: Key) -> Result<(), AppError> {
    host::send_host_event(state, HostEvent::KeyDown { key })
}

fn key_up(state: &AppState, key: Key) -> Result<(), AppError> {
    host::send_host_event(state, HostEvent::KeyUp { key })
}

/// Scripted session: pick co-op, circle both tanks while firing, take the
/// first upgrade after each wave.
fn drive_demo(state: &AppState, length: Duration) -> Result<(), AppError> {
    key_down(state, Key::char('2'))?;
    key_up(state, Key::char('2'))?;
    for key in [Key::char('w'), Key::char('d'), Key::ArrowUp, Key::ArrowLeft] {
        key_down(state, key)?;
    }

    let started = Instant::now();
    let mut last_report = started;
    let mut last_volley = started;
    let mut upgrade_pending = false;

    while started.elapsed() < length {
        std::thread::sleep(Duration::from_millis(50));
        let Some(snapshot) = host::get_snapshot(state)? else {
            continue;
        };

        if let Some(outcome) = snapshot.outcome {
            log::info!("session over: {outcome:?}");
            report(&snapshot);
            return Ok(());
        }

        match snapshot.mode {
            MatchMode::Upgrade if !upgrade_pending => {
                if let Some(option) = snapshot.upgrade_options.first() {
                    log::info!("choosing upgrade {}: {}", option.number, option.label);
                }
                key_down(state, Key::char('1'))?;
                key_up(state, Key::char('1'))?;
                upgrade_pending = true;
            }
            MatchMode::Coop => upgrade_pending = false,
            _ => {}
        }

        if last_volley.elapsed() >= FIRE_INTERVAL {
            for key in [Key::Space, Key::Enter] {
                key_down(state, key)?;
                key_up(state, key)?;
            }
            last_volley = Instant::now();
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            report(&snapshot);
            last_report = Instant::now();
        }
    }

    if let Some(snapshot) = host::get_snapshot(state)? {
        report(&snapshot);
    }
    Ok(())
}

fn report(snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    log::info!(
        "t={:.1}s mode={:?} wave={} enemies={} scores={:?} total={}",
        snapshot.time.elapsed_ms / 1000.0,
        snapshot.mode,
        hud.wave,
        hud.enemies_remaining,
        hud.player_scores,
        hud.total_score,
    );
    for tank in &snapshot.players {
        log::debug!(
            "player {:?} at ({:.0}, {:.0}) health {:.0}%",
            tank.slot,
            tank.position.x,
            tank.position.y,
            tank.health_fraction * 100.0,
        );
    }
}
