use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vitals_core::{CustomerHealthInput, HealthEngine, ScoreOptions};

use super::CommandResult;

pub fn run(input: &Path, options: ScoreOptions) -> CommandResult {
    match render(input, options) {
        Ok(output) => CommandResult::success(output),
        Err(error) => CommandResult::failure("score", &error),
    }
}

fn render(input: &Path, options: ScoreOptions) -> Result<String> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("could not read `{}`", input.display()))?;
    let record: CustomerHealthInput =
        serde_json::from_str(&raw).context("input is not a valid customer health record")?;

    let breakdown = HealthEngine::with_options(options).calculate(&record)?;
    serde_json::to_string_pretty(&breakdown).context("could not serialize breakdown")
}
