//! Headless galaxy runner: plays one seeded session with a scripted pilot

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use galaxy_sim::foundation::logging;
use galaxy_sim::prelude::*;

const DEFAULT_FRAMES: u64 = 3600;
const DEFAULT_SEED: u64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
struct RunConfig {
    seed: u64,
    frames: u64,
    delta_time: f32,
    config_path: Option<PathBuf>,
}

/// Totals gathered from the events of a run
#[derive(Debug, Default)]
struct RunStats {
    shots_fired: u32,
    enemies_destroyed: u32,
    enemies_escaped: u32,
    asteroids_destroyed: u32,
    hits_taken: u32,
    ships_lost: u32,
    powerups_collected: u32,
}

impl RunStats {
    fn record(&mut self, event: &WorldEvent) {
        match event {
            WorldEvent::ProjectileFired {
                owner: ProjectileOwner::Player,
                ..
            } => self.shots_fired += 1,
            WorldEvent::EnemyDestroyed { enemy_type, .. } => {
                log::debug!("Destroyed a {enemy_type}");
                self.enemies_destroyed += 1;
            }
            WorldEvent::EnemyEscaped { .. } => self.enemies_escaped += 1,
            WorldEvent::AsteroidDestroyed { .. } => self.asteroids_destroyed += 1,
            WorldEvent::PlayerDamaged { amount, health } => {
                log::debug!("Hit for {amount}, health now {health}");
                self.hits_taken += 1;
            }
            WorldEvent::PlayerDestroyed { position } => {
                log::info!("Ship lost at {:?}", position);
                self.ships_lost += 1;
            }
            WorldEvent::PowerUpCollected { power_type } => {
                log::info!("Collected {power_type} power-up");
                self.powerups_collected += 1;
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let matches = Command::new("galaxy")
        .about("Runs the galaxy lane shooter headless with a scripted pilot")
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Random seed for the run")
                .value_parser(value_parser!(u64))
                .default_value("1"),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .help("Number of frames to simulate")
                .value_parser(value_parser!(u64))
                .default_value("3600"),
        )
        .arg(
            Arg::new("dt")
                .long("dt")
                .value_name("SECONDS")
                .help("Fixed frame delta [default: 1/60]")
                .value_parser(value_parser!(f32)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Simulation config (.toml or .ron)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter used when RUST_LOG is not set")
                .default_value(DEFAULT_LOG_LEVEL),
        )
        .arg(
            Arg::new("write-default-config")
                .long("write-default-config")
                .value_name("FILE")
                .help("Write the default config to FILE and exit")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Skip the summary")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map_or(DEFAULT_LOG_LEVEL, String::as_str);
    logging::init_with_level(log_level);

    if let Some(path) = matches.get_one::<PathBuf>("write-default-config") {
        SimulationConfig::default()
            .save_to_file(path)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let run = RunConfig {
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(DEFAULT_SEED),
        frames: matches.get_one::<u64>("frames").copied().unwrap_or(DEFAULT_FRAMES),
        delta_time: matches.get_one::<f32>("dt").copied().unwrap_or(1.0 / 60.0),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
    };
    if run.delta_time.is_nan() || run.delta_time <= 0.0 {
        anyhow::bail!("--dt must be positive, got {}", run.delta_time);
    }

    let (session, stats) = run_session(&run)?;
    if !matches.get_flag("quiet") {
        print_summary(&session, &stats);
    }
    Ok(())
}

fn run_session(run: &RunConfig) -> Result<(GameSession, RunStats)> {
    let config = SimulationConfig::load_or_default(run.config_path.as_deref())
        .context("Failed to load simulation config")?;
    let mut session = GameSession::new(config, run.seed).context("Invalid simulation config")?;
    let mut stats = RunStats::default();

    log::info!("Running {} frames at dt={:.4}s with seed {}", run.frames, run.delta_time, run.seed);
    session.start();

    for frame in 0..run.frames {
        let intent = autopilot(session.clock().total_time());
        for event in session.tick(run.delta_time, &intent) {
            stats.record(&event);
        }

        if session.state() == GameState::GameOver {
            log::info!("Run ended at frame {frame}");
            break;
        }
        if frame % 600 == 0 {
            log::debug!(
                "frame {frame}: score {} lives {} fuel {:.1} entities {} particles {}",
                session.score(),
                session.lives(),
                session.fuel().level(),
                session.world().entity_count(),
                session.world().particles().len()
            );
        }
    }

    Ok((session, stats))
}

/// Weave across the lane and keep the trigger held
fn autopilot(time: f32) -> PlayerIntent {
    PlayerIntent {
        movement: Vec3::new((time * 0.8).sin(), 0.5 * (time * 0.5).cos(), 0.0),
        rotation: Vec3::new(0.0, 0.0, (time * 0.8).cos() * 0.25),
        fire: true,
    }
}

fn print_summary(session: &GameSession, stats: &RunStats) {
    println!("=== Run summary ===");
    match session.game_over_reason() {
        Some(reason) => println!("Result:              game over ({reason})"),
        None => println!("Result:              survived"),
    }
    let clock = session.clock();
    println!(
        "Time played:         {:.1}s ({} frames, {:.0} fps)",
        clock.total_time(),
        clock.frame_count(),
        clock.average_fps()
    );
    println!("Score:               {}", session.score());
    println!("Lives left:          {}", session.lives());
    let fuel = session.fuel();
    println!("Fuel left:           {:.1} ({:.0}%)", fuel.level(), fuel.fraction() * 100.0);
    println!("Shots fired:         {}", stats.shots_fired);
    println!("Enemies destroyed:   {}", stats.enemies_destroyed);
    println!("Enemies escaped:     {}", stats.enemies_escaped);
    println!("Asteroids destroyed: {}", stats.asteroids_destroyed);
    println!("Hits taken:          {}", stats.hits_taken);
    println!("Ships lost:          {}", stats.ships_lost);
    println!("Power-ups collected: {}", stats.powerups_collected);
}
