//! Policy-driven recommendation generation
//!
//! Each factor contributes at most one advisory: the severe message below
//! 50, the monitor message below 70, nothing otherwise. Output order always
//! matches factor order.

use super::scoring::FactorScores;
use super::types::Factor;
use super::{MONITOR_RECOMMENDATION_THRESHOLD, SEVERE_RECOMMENDATION_THRESHOLD};

/// The fixed advisory for one factor at one score, if any
pub fn advisory_for(factor: Factor, score: u8) -> Option<&'static str> {
    if score < SEVERE_RECOMMENDATION_THRESHOLD {
        Some(severe_message(factor))
    } else if score < MONITOR_RECOMMENDATION_THRESHOLD {
        Some(monitor_message(factor))
    } else {
        None
    }
}

pub(crate) fn recommendations(scores: &FactorScores) -> Vec<String> {
    Factor::ALL
        .iter()
        .filter_map(|&factor| advisory_for(factor, scores.for_factor(factor)))
        .map(str::to_string)
        .collect()
}

fn severe_message(factor: Factor) -> &'static str {
    match factor {
        Factor::Payment => {
            "Urgent: review payment terms and follow up on overdue invoices immediately"
        }
        Factor::Engagement => {
            "Schedule an adoption call; product usage has dropped to critical levels"
        }
        Factor::Contract => {
            "Renewal is at risk; open the renewal conversation with the account now"
        }
        Factor::Support => {
            "Escalate outstanding support issues to restore the relationship"
        }
    }
}

fn monitor_message(factor: Factor) -> &'static str {
    match factor {
        Factor::Payment => "Monitor payment behavior; delays are trending upward",
        Factor::Engagement => "Nudge the account toward unused features to deepen engagement",
        Factor::Contract => "Start renewal preparation early and revisit contract value",
        Factor::Support => "Review recent support interactions for friction",
    }
}

#[cfg(test)]
mod tests {
    use crate::health::scoring::FactorScores;
    use crate::health::types::Factor;

    use super::{advisory_for, recommendations};

    #[test]
    fn healthy_factors_emit_nothing() {
        let scores = FactorScores { payment: 70, engagement: 85, contract: 100, support: 71 };

        assert!(recommendations(&scores).is_empty());
    }

    #[test]
    fn thresholds_pick_severe_below_fifty_and_monitor_below_seventy() {
        assert!(advisory_for(Factor::Payment, 49).unwrap().starts_with("Urgent"));
        assert!(advisory_for(Factor::Payment, 50).unwrap().starts_with("Monitor"));
        assert!(advisory_for(Factor::Payment, 69).unwrap().starts_with("Monitor"));
        assert!(advisory_for(Factor::Payment, 70).is_none());
    }

    #[test]
    fn at_most_one_advisory_per_factor_in_factor_order() {
        let scores = FactorScores { payment: 10, engagement: 60, contract: 10, support: 60 };
        let advisories = recommendations(&scores);

        assert_eq!(advisories.len(), 4);
        assert!(advisories[0].contains("payment") || advisories[0].starts_with("Urgent"));
        assert!(advisories[1].contains("engagement") || advisories[1].contains("features"));
        assert!(advisories[2].contains("renewal") || advisories[2].contains("Renewal"));
        assert!(advisories[3].contains("support"));
    }

    #[test]
    fn every_factor_has_distinct_severe_and_monitor_messages() {
        let mut seen = std::collections::HashSet::new();
        for factor in Factor::ALL {
            for score in [0, 69] {
                let message = advisory_for(factor, score).expect("message below threshold");
                assert!(seen.insert(message), "duplicate advisory: {message}");
            }
        }
    }
}
