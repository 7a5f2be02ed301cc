//! Fail-fast field validation for raw health input

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::ScoringError;

use super::types::{
    ContractMetrics, CustomerHealthInput, EngagementMetrics, PaymentMetrics, SupportMetrics,
};

/// Validated view over one input: same metric groups, timestamps parsed.
/// Constructing one is the only way scoring work begins, so every scorer
/// downstream can rely on in-range, non-NaN fields.
#[derive(Clone, Debug)]
pub(crate) struct ValidatedInput<'a> {
    pub payment: &'a PaymentMetrics,
    pub engagement: &'a EngagementMetrics,
    pub contract: &'a ContractMetrics,
    pub support: &'a SupportMetrics,
    pub last_login_at: DateTime<Utc>,
    pub account_created_at: Option<DateTime<Utc>>,
}

/// Check every field against its documented range and parse timestamps.
/// Reports the first violation encountered; read-only otherwise.
pub(crate) fn validate(input: &CustomerHealthInput) -> Result<ValidatedInput<'_>, ScoringError> {
    validate_payment(&input.payment)?;
    let last_login_at =
        parse_timestamp("engagement.last_login_at", &input.engagement.last_login_at)?;
    validate_contract(&input.contract)?;
    validate_support(&input.support)?;

    let account_created_at = input
        .account_created_at
        .as_deref()
        .map(|raw| parse_timestamp("account_created_at", raw))
        .transpose()?;

    Ok(ValidatedInput {
        payment: &input.payment,
        engagement: &input.engagement,
        contract: &input.contract,
        support: &input.support,
        last_login_at,
        account_created_at,
    })
}

fn validate_payment(payment: &PaymentMetrics) -> Result<(), ScoringError> {
    if payment.overdue_amount.is_sign_negative() {
        return Err(ScoringError::validation(
            "payment.overdue_amount",
            payment.overdue_amount,
            "amount >= 0",
        ));
    }
    if let Some(score) = payment.reliability_score {
        if score > 100 {
            return Err(ScoringError::validation(
                "payment.reliability_score",
                score,
                "score in [0, 100]",
            ));
        }
    }
    Ok(())
}

fn validate_contract(contract: &ContractMetrics) -> Result<(), ScoringError> {
    if contract.contract_value.is_sign_negative() {
        return Err(ScoringError::validation(
            "contract.contract_value",
            contract.contract_value,
            "amount >= 0",
        ));
    }
    if let Some(probability) = contract.renewal_probability {
        if probability > 100 {
            return Err(ScoringError::validation(
                "contract.renewal_probability",
                probability,
                "score in [0, 100]",
            ));
        }
    }
    Ok(())
}

fn validate_support(support: &SupportMetrics) -> Result<(), ScoringError> {
    if !support.avg_resolution_hours.is_finite() || support.avg_resolution_hours < 0.0 {
        return Err(ScoringError::validation(
            "support.avg_resolution_hours",
            support.avg_resolution_hours,
            "finite number >= 0",
        ));
    }
    if !support.satisfaction_rating.is_finite()
        || !(1.0..=5.0).contains(&support.satisfaction_rating)
    {
        return Err(ScoringError::validation(
            "support.satisfaction_rating",
            support.satisfaction_rating,
            "number in [1.0, 5.0]",
        ));
    }
    Ok(())
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (read as
/// midnight UTC), matching what upstream record stores emit.
fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ScoringError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ScoringError::validation(field, format!("'{raw}'"), "RFC 3339 timestamp or YYYY-MM-DD date")
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::errors::ScoringError;
    use crate::health::types::{
        ContractMetrics, CustomerHealthInput, EngagementMetrics, PaymentMetrics, SupportMetrics,
    };

    use super::validate;

    fn input() -> CustomerHealthInput {
        CustomerHealthInput {
            payment: PaymentMetrics {
                days_since_last_payment: 10,
                avg_payment_delay_days: 2,
                overdue_amount: Decimal::ZERO,
                reliability_score: Some(88),
            },
            engagement: EngagementMetrics {
                monthly_logins: 12,
                features_used: 6,
                active_users: 9,
                last_login_at: "2026-08-20T09:30:00Z".to_string(),
            },
            contract: ContractMetrics {
                days_until_renewal: 200,
                contract_value: Decimal::from(42_000),
                recent_upgrade: false,
                renewal_probability: None,
            },
            support: SupportMetrics {
                avg_resolution_hours: 6.5,
                satisfaction_rating: 4.2,
                escalations: 1,
                open_tickets: 2,
            },
            account_created_at: Some("2024-03-01".to_string()),
        }
    }

    #[test]
    fn accepts_well_formed_input_and_parses_timestamps() {
        let raw = input();
        let validated = validate(&raw).expect("input should validate");

        assert_eq!(validated.last_login_at.to_rfc3339(), "2026-08-20T09:30:00+00:00");
        let created = validated.account_created_at.expect("creation date parsed");
        assert_eq!(created.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_negative_overdue_amount_naming_the_field() {
        let mut raw = input();
        raw.payment.overdue_amount = Decimal::from(-50);

        let error = validate(&raw).expect_err("negative amount must fail");
        assert!(matches!(
            error,
            ScoringError::Validation { field: "payment.overdue_amount", .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_reliability_score() {
        let mut raw = input();
        raw.payment.reliability_score = Some(101);

        let error = validate(&raw).expect_err("score above 100 must fail");
        assert!(matches!(
            error,
            ScoringError::Validation { field: "payment.reliability_score", .. }
        ));
    }

    #[test]
    fn rejects_unparseable_last_login_timestamp() {
        let mut raw = input();
        raw.engagement.last_login_at = "not-a-date".to_string();

        let error = validate(&raw).expect_err("malformed date must fail");
        assert_eq!(
            error.to_string(),
            "invalid value for `engagement.last_login_at`: expected RFC 3339 timestamp or \
             YYYY-MM-DD date, got 'not-a-date'"
        );
    }

    #[test]
    fn rejects_satisfaction_outside_rating_scale() {
        for rating in [0.9, 5.1, f64::NAN] {
            let mut raw = input();
            raw.support.satisfaction_rating = rating;

            let error = validate(&raw).expect_err("rating outside [1,5] must fail");
            assert!(matches!(
                error,
                ScoringError::Validation { field: "support.satisfaction_rating", .. }
            ));
        }
    }

    #[test]
    fn rejects_non_finite_resolution_time() {
        let mut raw = input();
        raw.support.avg_resolution_hours = f64::INFINITY;

        assert!(validate(&raw).is_err());
    }

    #[test]
    fn missing_account_creation_date_is_not_an_error() {
        let mut raw = input();
        raw.account_created_at = None;

        let validated = validate(&raw).expect("optional metadata may be absent");
        assert!(validated.account_created_at.is_none());
    }

    #[test]
    fn malformed_account_creation_date_is_an_error() {
        let mut raw = input();
        raw.account_created_at = Some("yesterday".to_string());

        let error = validate(&raw).expect_err("malformed creation date must fail");
        assert!(matches!(error, ScoringError::Validation { field: "account_created_at", .. }));
    }
}
