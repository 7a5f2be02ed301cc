//! The four independent factor scorers
//!
//! Each maps one metric group to a 0-100 sub-score by summing fixed
//! threshold bands. Bands are evaluated top-down; the first match wins and
//! listed upper bounds are inclusive. All functions are pure.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::types::{ContractMetrics, EngagementMetrics, PaymentMetrics, SupportMetrics};

/// Payment health: recency (max 40) + reliability (max 40) + overdue
/// penalty (max 20, inverted).
pub fn payment_score(payment: &PaymentMetrics) -> u8 {
    let recency: u8 = match payment.days_since_last_payment {
        0..=30 => 40,
        31..=60 => 30,
        61..=90 => 20,
        _ => 0,
    };

    let delay = payment.avg_payment_delay_days;
    let reliability: u8 = if delay <= 0 {
        40
    } else if delay <= 5 {
        35
    } else if delay <= 15 {
        25
    } else if delay <= 30 {
        15
    } else {
        0
    };

    (recency + reliability + overdue_points(payment.overdue_amount)).min(100)
}

fn overdue_points(amount: Decimal) -> u8 {
    if amount.is_zero() {
        20
    } else if amount <= Decimal::from(1_000) {
        15
    } else if amount <= Decimal::from(5_000) {
        10
    } else if amount <= Decimal::from(10_000) {
        5
    } else {
        0
    }
}

/// Engagement health: login frequency (max 30) + feature usage (max 25) +
/// active users (max 25) + login recency (max 20). `last_login_at` must
/// already have passed validation; `now` is the evaluation instant.
pub fn engagement_score(
    engagement: &EngagementMetrics,
    last_login_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> u8 {
    let logins: u8 = match engagement.monthly_logins {
        frequency if frequency >= 20 => 30,
        frequency if frequency >= 10 => 25,
        frequency if frequency >= 5 => 20,
        frequency if frequency >= 1 => 10,
        _ => 0,
    };

    let features: u8 = match engagement.features_used {
        used if used >= 15 => 25,
        used if used >= 10 => 20,
        used if used >= 5 => 15,
        used if used >= 1 => 10,
        _ => 0,
    };

    let users: u8 = match engagement.active_users {
        active if active >= 20 => 25,
        active if active >= 10 => 20,
        active if active >= 5 => 15,
        active if active >= 1 => 10,
        _ => 0,
    };

    // Whole elapsed days; a future login timestamp counts as today.
    let days_since_login = (now - last_login_at).num_days();
    let login_recency: u8 = if days_since_login <= 1 {
        20
    } else if days_since_login <= 7 {
        15
    } else if days_since_login <= 30 {
        10
    } else if days_since_login <= 90 {
        5
    } else {
        0
    };

    (logins + features + users + login_recency).min(100)
}

/// Contract health: renewal urgency (max 40) + contract value (max 35) +
/// recent activity (25 if upgraded, 15 otherwise; absence of an upgrade is
/// stable, never penalized to zero).
pub fn contract_score(contract: &ContractMetrics) -> u8 {
    let days = contract.days_until_renewal;
    let urgency: u8 = if days > 365 {
        40
    } else if days > 180 {
        35
    } else if days > 90 {
        25
    } else if days > 30 {
        15
    } else if days > 0 {
        5
    } else {
        // Contract expired
        0
    };

    let value = contract_value_points(contract.contract_value);
    let activity: u8 = if contract.recent_upgrade { 25 } else { 15 };

    (urgency + value + activity).min(100)
}

fn contract_value_points(value: Decimal) -> u8 {
    if value >= Decimal::from(100_000) {
        35
    } else if value >= Decimal::from(50_000) {
        30
    } else if value >= Decimal::from(20_000) {
        25
    } else if value >= Decimal::from(5_000) {
        20
    } else if value > Decimal::ZERO {
        10
    } else {
        0
    }
}

/// Support health: resolution time (max 30) + satisfaction (max 30, linear
/// over the 1.0-5.0 rating scale) + escalation penalty (max 25, inverted) +
/// open ticket load (max 15, inverted).
pub fn support_score(support: &SupportMetrics) -> u8 {
    let hours = support.avg_resolution_hours;
    let resolution: u8 = if hours <= 4.0 {
        30
    } else if hours <= 8.0 {
        25
    } else if hours <= 24.0 {
        20
    } else if hours <= 48.0 {
        15
    } else if hours <= 72.0 {
        10
    } else {
        0
    };

    let satisfaction =
        ((support.satisfaction_rating - 1.0) * 7.5).clamp(0.0, 30.0).round() as u8;

    let escalations: u8 = match support.escalations {
        0 => 25,
        1..=2 => 20,
        3..=4 => 10,
        _ => 0,
    };

    let tickets: u8 = match support.open_tickets {
        0..=1 => 15,
        2..=4 => 10,
        5..=9 => 5,
        _ => 0,
    };

    (resolution + satisfaction + escalations + tickets).min(100)
}
