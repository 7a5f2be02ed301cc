pub mod batch;
pub mod score;

use serde::Serialize;
use vitals_core::ScoringError;

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
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(command: &str, error: &anyhow::Error) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class(error).to_string()),
            message: format!("{error:#}"),
        };
        Self { exit_code: 1, output: serialize_payload(payload) }
    }
}

fn error_class(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<ScoringError>() {
        Some(ScoringError::Validation { .. }) => "validation",
        Some(ScoringError::Calculation(_)) => "calculation",
        None => "io",
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
