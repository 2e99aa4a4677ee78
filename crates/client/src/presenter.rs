//! Console rendering of bus events.
//!
//! The session has no knowledge of rendering; this task subscribes to the
//! bus and turns events into a battle log on stdout.

use skirmish_core::{AbilityOutcome, ActionReport};
use skirmish_runtime::{CombatEvent, Event, SessionEvent};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;

use crate::config::EventFormat;

/// Consumes combat and session events until the bus closes.
pub async fn present(mut combat: Receiver<Event>, mut session: Receiver<Event>, format: EventFormat) {
    loop {
        let event = tokio::select! {
            event = combat.recv() => event,
            event = session.recv() => event,
        };
        match event {
            Ok(event) => render(&event, format),
            Err(RecvError::Lagged(missed)) => {
                tracing::warn!(missed, "presenter lagged behind the bus");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn render(event: &Event, format: EventFormat) {
    match format {
        EventFormat::Json => match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(error) => tracing::error!(%error, "failed to encode event"),
        },
        EventFormat::Text => println!("{}", describe(event)),
    }
}

fn describe(event: &Event) -> String {
    match event {
        Event::Session(SessionEvent::Started { players, monsters }) => {
            format!(
                "{} take the field against {}",
                players.join(", "),
                monsters.join(", ")
            )
        }
        Event::Combat(CombatEvent::TurnResolved {
            actor_name, report, ..
        }) => match report.action {
            ActionReport::Attack {
                target,
                damage,
                target_health,
            } => format!(
                "[{}] {actor_name} attacks {target} for {damage} damage ({target_health} hp left)",
                report.turn
            ),
            ActionReport::Ability {
                ability,
                target,
                outcome,
            } => {
                let effect = match outcome {
                    AbilityOutcome::Damaged {
                        amount,
                        target_health,
                    } => format!("dealing {amount} damage ({target_health} hp left)"),
                    AbilityOutcome::Healed {
                        amount,
                        target_health,
                    } => format!("restoring {amount} hp ({target_health} hp now)"),
                    AbilityOutcome::NoOp => "to no effect".to_string(),
                };
                format!(
                    "[{}] {actor_name} uses {ability} on {target}, {effect}",
                    report.turn
                )
            }
        },
        Event::Combat(CombatEvent::ActionRejected { actor, reason, .. }) => {
            format!("{actor} hesitates: {reason}")
        }
        Event::Combat(CombatEvent::CombatEnded { winner }) => {
            format!("the {winner} side is victorious")
        }
    }
}
