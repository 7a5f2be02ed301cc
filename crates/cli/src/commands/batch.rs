use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use vitals_core::{CustomerId, CustomerRecord, HealthEngine};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct BatchFailure {
    id: CustomerId,
    status: &'static str,
    message: String,
}

pub fn run(input: &Path) -> CommandResult {
    let records = match load(input) {
        Ok(records) => records,
        Err(error) => return CommandResult::failure("batch", &error),
    };

    // One scoring instant for the whole batch so results are comparable.
    let now = Utc::now();
    let engine = HealthEngine::new();
    let results = engine.score_customers_at(&records, now);

    let mut lines = Vec::with_capacity(results.len());
    let mut failures = 0u32;
    for (record, result) in records.iter().zip(results) {
        let line = match result {
            Ok(scored) => serde_json::to_string(&scored),
            Err(error) => {
                failures += 1;
                serde_json::to_string(&BatchFailure {
                    id: record.id,
                    status: "error",
                    message: error.to_string(),
                })
            }
        };
        lines.push(line.unwrap_or_else(|error| {
            format!("{{\"status\":\"error\",\"message\":\"{error}\"}}")
        }));
    }

    CommandResult { exit_code: u8::from(failures > 0), output: lines.join("\n") }
}

fn load(input: &Path) -> Result<Vec<CustomerRecord>> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("could not read `{}`", input.display()))?;
    serde_json::from_str(&raw).context("input is not a valid array of customer records")
}
