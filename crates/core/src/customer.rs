use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::health::{CustomerHealthInput, HealthScoreBreakdown};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A customer as supplied by the record store: identity fields merged with
/// the raw health metric groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub company: String,
    pub health: CustomerHealthInput,
}

/// Batch scoring output: identity echoed back alongside the breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCustomer {
    pub id: CustomerId,
    pub name: String,
    pub company: String,
    pub breakdown: HealthScoreBreakdown,
}
