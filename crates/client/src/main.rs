//! Scheduler scenario runner.
//!
//! Loads a scenario from the content directory, plays it for a fixed number
//! of ticks and logs what the actor does.
//!
//! ```bash
//! NPC_SCENARIO=intruder RUST_LOG=npc_core=debug cargo run -p npc-sim
//! ```

use anyhow::{Context, Result};
use npc_content::ContentFactory;
use npc_runtime::Session;
use npc_sim::{SimConfig, describe};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!("Content directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let scheduler_config = factory
        .load_config()
        .context("loading scheduler configuration")?;
    let scenario = factory
        .load_scenario(&config.scenario)
        .with_context(|| format!("loading scenario \"{}\"", config.scenario))?;

    let mut session = Session::new(scheduler_config, scenario);
    for _ in 0..config.ticks {
        if session.is_over() {
            break;
        }
        let outcome = session.step(config.tick_seconds)?;
        for event in &outcome.events {
            tracing::info!("[{:>7.2}s] {}", outcome.at, describe(event));
        }
    }

    let actor = session.actor();
    println!(
        "scenario \"{}\" ran {:.2}s: actor {} at ({:.2}, {:.2}, {:.2}), running {}",
        session.scenario().name,
        session.clock(),
        if actor.is_dead() { "dead" } else { "alive" },
        actor.position().x,
        actor.position().y,
        actor.position().z,
        session.scheduler().current_name().unwrap_or("nothing"),
    );
    Ok(())
}
