use serde::Deserialize;

use events_core::config::Config;

/// Events service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct EventsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `EVENTS_PORT`.
    #[serde(default = "default_events_port")]
    pub events_port: u16,
}

fn default_events_port() -> u16 {
    8080
}

impl Config for EventsConfig {}
