//! Environment-backed CLI configuration.

use skirmish_core::CombatConfig;

/// How bus events are rendered to the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventFormat {
    /// Human-readable battle log.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// CLI configuration loaded from the environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub event_format: EventFormat,
    pub combat: CombatConfig,
}

impl CliConfig {
    /// Reads configuration from the environment.
    ///
    /// - `SKIRMISH_EVENT_FORMAT`: `text` (default) or `json`
    /// - `SKIRMISH_MAX_RETRIES`: rejected-submission allowance per turn
    pub fn from_env() -> Self {
        let event_format = match std::env::var("SKIRMISH_EVENT_FORMAT").as_deref() {
            Ok("json") => EventFormat::Json,
            _ => EventFormat::Text,
        };

        let combat = std::env::var("SKIRMISH_MAX_RETRIES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(CombatConfig::with_max_retries)
            .unwrap_or_default();

        Self {
            event_format,
            combat,
        }
    }
}
