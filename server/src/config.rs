//! Process configuration read from the environment.

use std::env;

use todo_core::IdMode;

/// Runtime configuration for the server binary.
///
/// - `PORT` — listen port, default `3000`.
/// - `TODO_ID_MODE` — `sequential` (default) or `uuid`.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub port: u16,
    pub id_mode: IdMode,
}

impl Config {
    /// Read configuration from the environment. Missing or unparseable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        let id_mode = match env::var("TODO_ID_MODE").as_deref() {
            Ok(value) if value.eq_ignore_ascii_case("uuid") => IdMode::Uuid,
            _ => IdMode::Sequential,
        };
        Self { port, id_mode }
    }
}
