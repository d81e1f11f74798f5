pub mod actions;
pub mod config;
pub mod doctor;
pub mod invoke;

use serde::Serialize;
use serde_json::{Map, Value};
use storefront_actions::HttpBackend;
use storefront_core::config::{AppConfig, LoadOptions};

pub const EXIT_OK: u8 = 0;
pub const EXIT_CHECKS_FAILED: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_RUNTIME_INIT: u8 = 3;
pub const EXIT_UNKNOWN_ACTION: u8 = 4;
pub const EXIT_MALFORMED_SLOT: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: EXIT_OK, output: serialize_payload(&payload) }
    }

    /// Success envelope carrying command-specific fields next to `command` and `status`.
    pub fn success_with(command: &str, details: impl Serialize) -> Self {
        let mut payload = match serde_json::to_value(details) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => Map::from_iter([("result".to_string(), other)]),
            Err(error) => {
                return Self::failure(command, "serialization", error.to_string(), EXIT_RUNTIME_INIT)
            }
        };
        payload.insert("command".to_string(), Value::from(command));
        payload.insert("status".to_string(), Value::from("ok"));
        Self { exit_code: EXIT_OK, output: serialize_payload(&payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }
}

/// Loads configuration and builds the backend client, or the failure the caller should print.
fn configured_backend(command: &str) -> Result<(AppConfig, HttpBackend), CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_CONFIG,
        )
    })?;
    let backend = HttpBackend::from_config(&config.backend).map_err(|error| {
        CommandResult::failure(command, "backend_setup", error.to_string(), EXIT_CONFIG)
    })?;
    Ok((config, backend))
}

fn serialize_payload(payload: &impl Serialize) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
