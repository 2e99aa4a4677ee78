//! Topic-based event bus: the presentation sink.
//!
//! The session publishes turn-by-turn outcome events here and has no
//! knowledge of how (or whether) they are rendered. Publishing is
//! best-effort: a combat with no observers runs exactly the same.

use serde::{Deserialize, Serialize};
use skirmish_core::{EntityId, ErrorSeverity, Side, TurnReport};
use tokio::sync::broadcast;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Turn resolution and rejection events.
    Combat,
    /// Session lifecycle events.
    Session,
}

/// Combat-topic events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    /// One turn resolved; carries the engine's full report.
    TurnResolved {
        actor: EntityId,
        actor_name: String,
        report: TurnReport,
    },

    /// A submission was rejected and the turn will be re-prompted.
    ActionRejected {
        actor: EntityId,
        severity: ErrorSeverity,
        reason: String,
    },

    /// The combat reached its terminal phase.
    CombatEnded { winner: Side },
}

/// Session-topic events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A combat session started.
    Started {
        players: Vec<String>,
        monsters: Vec<String>,
    },
}

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Combat(CombatEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about; slow consumers drop
/// old events rather than back-pressuring the combat loop.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity per topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            combat: broadcast::channel(capacity).0,
            session: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Session => &self.session,
        }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - normal, not an error.
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
