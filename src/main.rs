use std::io::{self, BufRead, Write};

use dotenv::dotenv;
use maze_brains::protocol::parse_turn;
use maze_brains::{BrainConfig, PlayerId, build_brain};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maze_brains=debug,info"));

    // stdout carries the protocol, so logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = BrainConfig::from_env()?;
    let me = PlayerId::goody(config.player_id);
    let mut brain = build_brain(&config, me);
    info!(
        "Running {} brain for player {} (ping staleness {}, steering {})",
        brain.name(),
        me.id,
        config.ping_staleness,
        config.steering
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (turn, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed = parse_turn(&line).inspect_err(|e| error!("Turn {}: {}", turn, e))?;
        let action = brain
            .take_turn(&parsed.obstruction, parsed.ping.as_ref())
            .inspect_err(|e| error!("Turn {}: {}", turn, e))?;

        debug!("turn: {}, action: {}", turn, action);
        writeln!(stdout, "{}", action)?;
        stdout.flush()?;
    }

    info!("Input closed, exiting");
    Ok(())
}
