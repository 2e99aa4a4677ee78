//! Skirmish demo client.
//!
//! Composition root that assembles the runtime collaborators - seeded
//! scenario, decision providers, event bus, console presenter - and runs one
//! auto-battle to completion.

mod config;
mod presenter;

use std::sync::Arc;

use anyhow::Result;
use skirmish_runtime::{CombatSession, EventBus, HostileProvider, Topic, scenario};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let scenario = scenario::demo()?;

    let bus = EventBus::new();
    let presenter = tokio::spawn(presenter::present(
        bus.subscribe(Topic::Combat),
        bus.subscribe(Topic::Session),
        config.event_format,
    ));

    let mut session = CombatSession::builder()
        .catalog(Arc::new(scenario.catalog))
        .abilities(Arc::new(scenario.abilities))
        .players(Arc::new(HostileProvider))
        .monsters(Arc::new(HostileProvider))
        .bus(bus)
        .config(config.combat)
        .build(scenario.roster, scenario.first_actor)?;

    let outcome = session.run_to_completion().await?;
    tracing::info!(winner = %outcome.winner, "combat complete");

    // Dropping the session drops the bus senders, which ends the presenter.
    drop(session);
    presenter.await?;

    Ok(())
}
