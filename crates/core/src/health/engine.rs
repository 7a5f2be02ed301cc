//! Orchestration of the scoring pipeline

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::customer::{CustomerRecord, ScoredCustomer};
use crate::errors::ScoringError;

use super::scoring::FactorScores;
use super::types::{CustomerHealthInput, HealthScoreBreakdown, RiskLevel, ScoreOptions};
use super::{confidence, factors, recommendations, scoring, validate, ScoringResult};
use super::DEFAULT_WEIGHTS;

/// Stateless scoring engine: validate, score the four factors, estimate
/// confidence, aggregate, recommend. Construct one explicitly and pass it
/// where scoring happens; it holds only its options and caches nothing, so
/// a call either returns a complete breakdown or fails.
#[derive(Clone, Debug, Default)]
pub struct HealthEngine {
    options: ScoreOptions,
}

impl HealthEngine {
    /// Engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit options
    pub fn with_options(options: ScoreOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    /// Score one customer against the current wall clock
    pub fn calculate(&self, input: &CustomerHealthInput) -> ScoringResult<HealthScoreBreakdown> {
        self.calculate_at(input, Utc::now())
    }

    /// Score one customer against an explicit evaluation instant. Identical
    /// input and an identical `now` always produce an identical breakdown.
    ///
    /// Validation failures propagate verbatim; any other internal failure is
    /// wrapped as [`ScoringError::Calculation`] so callers never see a
    /// leaked internal error type.
    pub fn calculate_at(
        &self,
        input: &CustomerHealthInput,
        now: DateTime<Utc>,
    ) -> ScoringResult<HealthScoreBreakdown> {
        match self.breakdown_at(input, now) {
            Ok(breakdown) => {
                debug!(
                    overall = breakdown.overall,
                    confidence = breakdown.confidence,
                    risk = ?breakdown.risk_level,
                    "health score calculated"
                );
                Ok(breakdown)
            }
            Err(error @ ScoringError::Validation { .. }) => {
                warn!(%error, "health input rejected");
                Err(error)
            }
            // Anything that is not a caller contract violation surfaces as
            // a calculation failure, preserving the original message.
            Err(ScoringError::Calculation(message)) => Err(ScoringError::Calculation(message)),
        }
    }

    /// Convenience wrapper returning just the overall score
    pub fn overall_score(&self, input: &CustomerHealthInput) -> ScoringResult<u8> {
        self.overall_score_at(input, Utc::now())
    }

    pub fn overall_score_at(
        &self,
        input: &CustomerHealthInput,
        now: DateTime<Utc>,
    ) -> ScoringResult<u8> {
        Ok(self.calculate_at(input, now)?.overall)
    }

    /// Score a batch of customer records independently. Each record either
    /// yields a [`ScoredCustomer`] or its own error; one bad record never
    /// affects the others.
    pub fn score_customers_at(
        &self,
        customers: &[CustomerRecord],
        now: DateTime<Utc>,
    ) -> Vec<ScoringResult<ScoredCustomer>> {
        customers
            .iter()
            .map(|record| {
                self.calculate_at(&record.health, now).map(|breakdown| ScoredCustomer {
                    id: record.id,
                    name: record.name.clone(),
                    company: record.company.clone(),
                    breakdown,
                })
            })
            .collect()
    }

    fn breakdown_at(
        &self,
        input: &CustomerHealthInput,
        now: DateTime<Utc>,
    ) -> ScoringResult<HealthScoreBreakdown> {
        let validated = validate::validate(input)?;

        // The four scorers and the confidence estimator are independent of
        // one another; aggregation is the single join point.
        let scores = FactorScores {
            payment: factors::payment_score(validated.payment),
            engagement: factors::engagement_score(validated.engagement, validated.last_login_at, now),
            contract: factors::contract_score(validated.contract),
            support: factors::support_score(validated.support),
        };

        let confidence = if self.options.include_confidence {
            confidence::confidence_score(&validated, &self.options, now)
        } else {
            100
        };

        let (overall, factor_records) = scoring::aggregate(&scores, &DEFAULT_WEIGHTS);

        Ok(HealthScoreBreakdown {
            overall,
            confidence,
            risk_level: RiskLevel::from_score(overall),
            factors: factor_records,
            recommendations: recommendations::recommendations(&scores),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::errors::ScoringError;
    use crate::health::types::{
        ContractMetrics, CustomerHealthInput, EngagementMetrics, PaymentMetrics, RiskLevel,
        ScoreOptions, SupportMetrics,
    };

    use super::HealthEngine;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn healthy_input() -> CustomerHealthInput {
        CustomerHealthInput {
            payment: PaymentMetrics {
                days_since_last_payment: 3,
                avg_payment_delay_days: -1,
                overdue_amount: Decimal::ZERO,
                reliability_score: Some(95),
            },
            engagement: EngagementMetrics {
                monthly_logins: 25,
                features_used: 16,
                active_users: 30,
                last_login_at: (now() - Duration::hours(6)).to_rfc3339(),
            },
            contract: ContractMetrics {
                days_until_renewal: 400,
                contract_value: Decimal::from(120_000),
                recent_upgrade: true,
                renewal_probability: Some(90),
            },
            support: SupportMetrics {
                avg_resolution_hours: 3.0,
                satisfaction_rating: 4.8,
                escalations: 0,
                open_tickets: 1,
            },
            account_created_at: Some((now() - Duration::days(700)).to_rfc3339()),
        }
    }

    #[test]
    fn healthy_composite_classifies_as_healthy() {
        let breakdown =
            HealthEngine::new().calculate_at(&healthy_input(), now()).expect("should score");

        assert!(breakdown.overall >= 71);
        assert_eq!(breakdown.risk_level, RiskLevel::Healthy);
        assert_eq!(breakdown.confidence, 100);
        assert!(breakdown.recommendations.is_empty());
    }

    #[test]
    fn identical_input_and_instant_produce_identical_output() {
        let engine = HealthEngine::new();
        let input = healthy_input();

        let first = engine.calculate_at(&input, now()).expect("should score");
        let second = engine.calculate_at(&input, now()).expect("should score");

        assert_eq!(first, second);
    }

    #[test]
    fn validation_failure_surfaces_verbatim_before_any_scoring() {
        let mut input = healthy_input();
        input.support.satisfaction_rating = 0.0;

        let error = HealthEngine::new().calculate_at(&input, now()).expect_err("must fail");
        assert!(matches!(
            error,
            ScoringError::Validation { field: "support.satisfaction_rating", .. }
        ));
    }

    #[test]
    fn disabling_confidence_pins_it_at_one_hundred() {
        let mut input = healthy_input();
        input.payment.reliability_score = None;
        input.contract.renewal_probability = None;
        input.account_created_at = Some((now() - Duration::days(10)).to_rfc3339());

        let engine =
            HealthEngine::with_options(ScoreOptions::new().with_include_confidence(false));
        let breakdown = engine.calculate_at(&input, now()).expect("should score");

        assert_eq!(breakdown.confidence, 100);
    }

    #[test]
    fn overall_score_wrapper_matches_full_breakdown() {
        let engine = HealthEngine::new();
        let input = healthy_input();

        let breakdown = engine.calculate_at(&input, now()).expect("should score");
        let overall = engine.overall_score_at(&input, now()).expect("should score");

        assert_eq!(overall, breakdown.overall);
    }
}
