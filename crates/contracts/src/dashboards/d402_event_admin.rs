use serde::{Deserialize, Serialize};

use crate::domain::Company;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummaryResponse {
    #[serde(rename = "exhibitorCount")]
    pub exhibitor_count: usize,
    #[serde(rename = "staffCount")]
    pub staff_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
    pub exhibitors: Vec<ExhibitorRow>,
}

/// One exhibiting company with its staffing and capture tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExhibitorRow {
    pub company: Company,
    #[serde(rename = "staffCount")]
    pub staff_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
}
