use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid value for `{field}`: expected {expected}, got {received}")]
    Validation { field: &'static str, received: String, expected: &'static str },
    #[error("health score calculation failed: {0}")]
    Calculation(String),
}

impl ScoringError {
    pub(crate) fn validation(
        field: &'static str,
        received: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::Validation { field, received: received.to_string(), expected }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
