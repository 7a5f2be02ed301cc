//! Confidence estimation
//!
//! Confidence reflects how trustworthy the health score is, not how healthy
//! the customer is. It starts at 100 and takes penalties for incomplete
//! data, stale login activity, and short account tenure. It never looks at
//! the factor scores.

use chrono::{DateTime, Utc};

use super::types::ScoreOptions;
use super::validate::ValidatedInput;

const MISSING_RELIABILITY_PENALTY: u8 = 5;
const MISSING_RENEWAL_PROBABILITY_PENALTY: u8 = 5;
const STALE_LOGIN_PENALTY: u8 = 10;
const DORMANT_LOGIN_PENALTY: u8 = 30;
const NEW_CUSTOMER_PENALTY: u8 = 25;

pub(crate) fn confidence_score(
    input: &ValidatedInput<'_>,
    options: &ScoreOptions,
    now: DateTime<Utc>,
) -> u8 {
    let assumed = options.missing_data.assumed_score();
    let mut confidence: u8 = 100;

    if input.payment.reliability_score.or(assumed).is_none() {
        confidence = confidence.saturating_sub(MISSING_RELIABILITY_PENALTY);
    }
    if input.contract.renewal_probability.or(assumed).is_none() {
        confidence = confidence.saturating_sub(MISSING_RENEWAL_PROBABILITY_PENALTY);
    }

    // The two recency penalties do not stack.
    let days_since_login = (now - input.last_login_at).num_days();
    if days_since_login > 90 {
        confidence = confidence.saturating_sub(DORMANT_LOGIN_PENALTY);
    } else if days_since_login > 30 {
        confidence = confidence.saturating_sub(STALE_LOGIN_PENALTY);
    }

    if let Some(created_at) = input.account_created_at {
        let account_age_days = (now - created_at).num_days();
        if account_age_days < i64::from(options.new_customer_threshold_days) {
            confidence = confidence.saturating_sub(NEW_CUSTOMER_PENALTY);
        }
    }

    confidence
}
