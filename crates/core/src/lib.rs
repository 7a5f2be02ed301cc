pub mod customer;
pub mod errors;
pub mod health;

pub use customer::{CustomerId, CustomerRecord, ScoredCustomer};
pub use errors::ScoringError;
pub use health::{
    contract_score, engagement_score, payment_score, support_score, ContractMetrics,
    CustomerHealthInput, EngagementMetrics, Factor, FactorScore, FactorScores, FactorWeights,
    HealthEngine, HealthScoreBreakdown, MissingDataStrategy, PaymentMetrics, RiskLevel,
    ScoreOptions, ScoringResult, SupportMetrics,
};
