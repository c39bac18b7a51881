use serde::{Deserialize, Serialize};

use crate::domain::Lead;

/// Lead-level dashboard data: the captured leads visible in the current
/// scope plus headline counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadInboxResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub rated: usize,
    #[serde(rename = "avgRating")]
    pub avg_rating: f64,
}
