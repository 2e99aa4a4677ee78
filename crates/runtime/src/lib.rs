//! Runtime orchestration for the combat resolution core.
//!
//! This crate wires the decision-provider abstraction, repositories, and the
//! event bus into a cohesive session API. Consumers embed [`CombatSession`]
//! to drive turns and subscribe to outcome events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and its builder
//! - [`providers`] sources actor intent (scripted, roster-scanning)
//! - [`repository`] supplies hydrated actors and item definitions
//! - [`events`] provides the topic-based event bus presentation sink
//! - [`scenario`] seeds demo content

pub mod events;
pub mod providers;
pub mod repository;
pub mod scenario;
pub mod session;

pub use events::{CombatEvent, Event, EventBus, SessionEvent, Topic};
pub use providers::{DecisionProvider, HostileProvider, ProviderError, ScriptedProvider};
pub use repository::{
    ActorRepository, InMemoryActorRepository, InMemoryItemCatalog, RepositoryError,
};
pub use session::{CombatSession, CombatSessionBuilder, SessionError};
