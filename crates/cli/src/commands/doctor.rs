use std::sync::Arc;

use serde::Serialize;
use storefront_actions::{storefront_registry, HttpBackend};
use storefront_core::config::{AppConfig, LoadOptions};

use crate::commands::{CommandResult, EXIT_CHECKS_FAILED, EXIT_CONFIG, EXIT_OK};

const EXPECTED_ACTION_COUNT: usize = 10;

/// Checks whose failure means the configuration itself is unusable.
const CONFIG_CHECKS: [&str; 2] = ["config_validation", "backend_setup"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    fn exit_code(&self) -> u8 {
        let config_failed = self.checks.iter().any(|check| {
            CONFIG_CHECKS.contains(&check.name) && check.status == CheckStatus::Fail
        });
        match self.overall_status {
            CheckStatus::Pass => EXIT_OK,
            _ if config_failed => EXIT_CONFIG,
            _ => EXIT_CHECKS_FAILED,
        }
    }
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = report.exit_code();

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match HttpBackend::from_config(&config.backend) {
                Ok(backend) => {
                    checks.push(check_action_registry(&backend));
                    checks.push(check_backend_connectivity(&backend));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "backend_setup",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("action_registry", "backend client could not be built"));
                    checks.push(skipped(
                        "backend_connectivity",
                        "backend client could not be built",
                    ));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("action_registry", "configuration did not load"));
            checks.push(skipped("backend_connectivity", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn check_action_registry(backend: &HttpBackend) -> DoctorCheck {
    let registered = storefront_registry(Arc::new(backend.clone())).len();
    let status =
        if registered == EXPECTED_ACTION_COUNT { CheckStatus::Pass } else { CheckStatus::Fail };
    DoctorCheck {
        name: "action_registry",
        status,
        details: format!("{registered} of {EXPECTED_ACTION_COUNT} storefront actions registered"),
    }
}

fn check_backend_connectivity(backend: &HttpBackend) -> DoctorCheck {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return DoctorCheck {
                name: "backend_connectivity",
                status: CheckStatus::Fail,
                details: format!("failed to initialize async runtime: {error}"),
            };
        }
    };

    match runtime.block_on(backend.probe()) {
        Ok(status) => DoctorCheck {
            name: "backend_connectivity",
            status: CheckStatus::Pass,
            details: format!("`{}` answered with HTTP {status}", backend.base_url()),
        },
        Err(error) => DoctorCheck {
            name: "backend_connectivity",
            status: CheckStatus::Fail,
            details: format!("`{}` unreachable: {error}", backend.base_url()),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
