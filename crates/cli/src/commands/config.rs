use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use storefront_core::config::{AppConfig, LoadOptions};
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_OK};

struct Field<'a> {
    key: &'static str,
    env_keys: &'static [&'static str],
    value: &'a str,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    CommandResult { exit_code: EXIT_OK, output: render(&config) }
}

fn render(config: &AppConfig) -> String {
    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let timeout_secs = config.backend.timeout_secs.to_string();
    let port = config.server.port.to_string();
    let graceful_shutdown_secs = config.server.graceful_shutdown_secs.to_string();
    let log_format = format!("{:?}", config.logging.format).to_lowercase();

    let fields = [
        Field {
            key: "backend.base_url",
            env_keys: &["STOREFRONT_BACKEND_BASE_URL"],
            value: &config.backend.base_url,
        },
        Field {
            key: "backend.timeout_secs",
            env_keys: &["STOREFRONT_BACKEND_TIMEOUT_SECS"],
            value: &timeout_secs,
        },
        Field {
            key: "server.bind_address",
            env_keys: &["STOREFRONT_SERVER_BIND_ADDRESS"],
            value: &config.server.bind_address,
        },
        Field { key: "server.port", env_keys: &["STOREFRONT_SERVER_PORT"], value: &port },
        Field {
            key: "server.graceful_shutdown_secs",
            env_keys: &["STOREFRONT_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: &graceful_shutdown_secs,
        },
        Field {
            key: "logging.level",
            env_keys: &["STOREFRONT_LOGGING_LEVEL", "STOREFRONT_LOG_LEVEL"],
            value: &config.logging.level,
        },
        Field {
            key: "logging.format",
            env_keys: &["STOREFRONT_LOGGING_FORMAT", "STOREFRONT_LOG_FORMAT"],
            value: &log_format,
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        let source = field_source(
            field.key,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key, field.value, source));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("storefront.toml"), PathBuf::from("config/storefront.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
