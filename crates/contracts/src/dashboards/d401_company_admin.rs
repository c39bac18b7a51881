use serde::{Deserialize, Serialize};

use crate::domain::TargetUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummaryResponse {
    #[serde(rename = "staffCount")]
    pub staff_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
    #[serde(rename = "ratedLeadCount")]
    pub rated_lead_count: usize,
    pub staff: Vec<StaffRow>,
}

/// One booth staff member with their capture tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRow {
    pub user: TargetUser,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
}
