//! Weighted aggregation of the four factor scores

use serde::{Deserialize, Serialize};

use super::types::{Factor, FactorScore};
use super::DEFAULT_WEIGHTS;

/// Fixed aggregation weights for the four factors. The defaults are
/// compile-time constants and always sum to exactly 1.0; they are not
/// configurable per call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub payment: f64,
    pub engagement: f64,
    pub contract: f64,
    pub support: f64,
}

impl FactorWeights {
    pub fn for_factor(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Payment => self.payment,
            Factor::Engagement => self.engagement,
            Factor::Contract => self.contract,
            Factor::Support => self.support,
        }
    }

    pub fn sum(&self) -> f64 {
        self.payment + self.engagement + self.contract + self.support
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// The four factor sub-scores, each 0-100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub payment: u8,
    pub engagement: u8,
    pub contract: u8,
    pub support: u8,
}

impl FactorScores {
    pub fn for_factor(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Payment => self.payment,
            Factor::Engagement => self.engagement,
            Factor::Contract => self.contract,
            Factor::Support => self.support,
        }
    }
}

/// Combine the factor scores into the overall 0-100 score plus per-factor
/// contribution records. `overall = round(sum(score_i * weight_i))`; each
/// contribution is rounded independently, so their sum can drift from the
/// overall by at most one point.
pub fn aggregate(scores: &FactorScores, weights: &FactorWeights) -> (u8, Vec<FactorScore>) {
    debug_assert!((weights.sum() - 1.0).abs() < 1e-9);

    let factors: Vec<FactorScore> = Factor::ALL
        .iter()
        .map(|&factor| {
            let score = scores.for_factor(factor);
            let weight = weights.for_factor(factor);
            FactorScore {
                factor,
                score,
                weight,
                contribution: (f64::from(score) * weight).round() as u8,
            }
        })
        .collect();

    let overall = Factor::ALL
        .iter()
        .map(|&factor| f64::from(scores.for_factor(factor)) * weights.for_factor(factor))
        .sum::<f64>()
        .round() as u8;

    (overall, factors)
}
