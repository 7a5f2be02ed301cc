//! Customer Health Scoring Engine
//!
//! Converts raw customer signals (payment behavior, product engagement,
//! contract status, support experience) into a normalized 0-100 health
//! score, a risk classification, a confidence estimate, and human-readable
//! recommendations. The whole pipeline is deterministic: identical input and
//! an identical evaluation instant always produce an identical breakdown.

mod confidence;
mod engine;
mod factors;
mod recommendations;
mod scoring;
mod types;
mod validate;

pub use engine::HealthEngine;
pub use factors::{contract_score, engagement_score, payment_score, support_score};
pub use recommendations::advisory_for;
pub use scoring::{aggregate, FactorScores, FactorWeights};
pub use types::{
    ContractMetrics, CustomerHealthInput, EngagementMetrics, Factor, FactorScore,
    HealthScoreBreakdown, MissingDataStrategy, PaymentMetrics, RiskLevel, ScoreOptions,
    SupportMetrics,
};

use crate::errors::ScoringError;

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Fixed aggregation weights; always sum to exactly 1.0
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    payment: 0.40,
    engagement: 0.30,
    contract: 0.20,
    support: 0.10,
};

/// Factor scores below this threshold get the severe recommendation
pub const SEVERE_RECOMMENDATION_THRESHOLD: u8 = 50;

/// Factor scores below this threshold (but at or above the severe one)
/// get the monitor recommendation
pub const MONITOR_RECOMMENDATION_THRESHOLD: u8 = 70;

/// Accounts younger than this many days are penalized as "new customer"
/// by the confidence estimator unless overridden in [`ScoreOptions`]
pub const DEFAULT_NEW_CUSTOMER_THRESHOLD_DAYS: u32 = 90;
