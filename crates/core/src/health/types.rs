//! Types for the health scoring engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DEFAULT_NEW_CUSTOMER_THRESHOLD_DAYS;

/// Raw payment signals for one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetrics {
    /// Days since the last payment was received
    pub days_since_last_payment: u32,
    /// Average payment delay in days; zero or negative means on time or early
    pub avg_payment_delay_days: i32,
    /// Currently overdue amount in currency units
    pub overdue_amount: Decimal,
    /// Optional precomputed reliability score (0-100) from an upstream system
    pub reliability_score: Option<u8>,
}

/// Raw product engagement signals for one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Logins in the trailing month
    pub monthly_logins: u32,
    /// Distinct features used in the period
    pub features_used: u32,
    /// Active users on the account
    pub active_users: u32,
    /// Timestamp of the most recent login (RFC 3339 or plain date)
    pub last_login_at: String,
}

/// Raw contract signals for one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractMetrics {
    /// Days until renewal; negative means the contract already expired
    pub days_until_renewal: i32,
    /// Annual contract value in currency units
    pub contract_value: Decimal,
    /// Whether the customer upgraded recently
    pub recent_upgrade: bool,
    /// Optional precomputed renewal probability (0-100); reserved upstream
    /// score, only the confidence estimator looks at its presence
    pub renewal_probability: Option<u8>,
}

/// Raw support experience signals for one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportMetrics {
    /// Average ticket resolution time in hours
    pub avg_resolution_hours: f64,
    /// Satisfaction rating on a 1.0-5.0 scale
    pub satisfaction_rating: f64,
    /// Escalations in the period
    pub escalations: u32,
    /// Currently open tickets
    pub open_tickets: u32,
}

/// Everything the engine needs to score one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerHealthInput {
    pub payment: PaymentMetrics,
    pub engagement: EngagementMetrics,
    pub contract: ContractMetrics,
    pub support: SupportMetrics,
    /// Account creation timestamp; only used to detect new customers
    /// when estimating confidence
    pub account_created_at: Option<String>,
}

/// One of the four independent metric groups
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Payment,
    Engagement,
    Contract,
    Support,
}

impl Factor {
    /// All factors in aggregation (and recommendation) order
    pub const ALL: [Factor; 4] =
        [Factor::Payment, Factor::Engagement, Factor::Contract, Factor::Support];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Payment => "payment",
            Factor::Engagement => "engagement",
            Factor::Contract => "contract",
            Factor::Support => "support",
        }
    }
}

/// Three-tier classification derived solely from the overall score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Overall score 71-100
    Healthy,
    /// Overall score 31-70
    Warning,
    /// Overall score 0-30
    Critical,
}

impl RiskLevel {
    /// Classify an overall score into its risk tier
    pub fn from_score(score: u8) -> Self {
        if score >= 71 {
            RiskLevel::Healthy
        } else if score >= 31 {
            RiskLevel::Warning
        } else {
            RiskLevel::Critical
        }
    }
}

/// One factor's share of the overall score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    /// Sub-score for this factor (0-100)
    pub score: u8,
    /// Fixed aggregation weight (0 < w <= 1)
    pub weight: f64,
    /// round(score x weight)
    pub contribution: u8,
}

/// Immutable result of one scoring call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreBreakdown {
    /// Weighted overall health score (0-100)
    pub overall: u8,
    /// How trustworthy the score is (0-100); data quality, not health
    pub confidence: u8,
    /// Tier derived from `overall` via the fixed 0-30/31-70/71-100 bands
    pub risk_level: RiskLevel,
    /// Per-factor records in payment, engagement, contract, support order
    pub factors: Vec<FactorScore>,
    /// At most one advisory per factor, in factor order
    pub recommendations: Vec<String>,
}

impl HealthScoreBreakdown {
    /// Look up the record for one factor
    pub fn factor(&self, factor: Factor) -> Option<&FactorScore> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }
}

/// Policy for optional precomputed scores that are absent from the input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataStrategy {
    /// Leave absent scores absent; the confidence penalty applies
    #[default]
    Neutral,
    /// Assume a pessimistic value for absent scores
    Conservative,
    /// Assume a favorable value for absent scores
    Optimistic,
}

impl MissingDataStrategy {
    /// Value substituted for an absent optional score, if any. The factor
    /// band tables never change; substitution only affects how absence is
    /// treated downstream (confidence today).
    pub fn assumed_score(&self) -> Option<u8> {
        match self {
            MissingDataStrategy::Neutral => None,
            MissingDataStrategy::Conservative => Some(25),
            MissingDataStrategy::Optimistic => Some(75),
        }
    }
}

/// Per-call scoring options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOptions {
    /// When false, confidence is pinned at 100 and no penalties apply
    pub include_confidence: bool,
    /// Accounts younger than this many days take the new-customer penalty
    pub new_customer_threshold_days: u32,
    /// How absent optional precomputed scores are treated
    pub missing_data: MissingDataStrategy,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            include_confidence: true,
            new_customer_threshold_days: DEFAULT_NEW_CUSTOMER_THRESHOLD_DAYS,
            missing_data: MissingDataStrategy::default(),
        }
    }
}

impl ScoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle confidence estimation
    pub fn with_include_confidence(mut self, include: bool) -> Self {
        self.include_confidence = include;
        self
    }

    /// Override the new-customer tenure threshold
    pub fn with_new_customer_threshold(mut self, days: u32) -> Self {
        self.new_customer_threshold_days = days;
        self
    }

    /// Set the missing-data policy
    pub fn with_missing_data(mut self, strategy: MissingDataStrategy) -> Self {
        self.missing_data = strategy;
        self
    }
}
