use serde::{Deserialize, Serialize};

use crate::domain::Organiser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSummaryResponse {
    #[serde(rename = "organiserCount")]
    pub organiser_count: usize,
    #[serde(rename = "eventCount")]
    pub event_count: usize,
    #[serde(rename = "companyCount")]
    pub company_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
    pub organisers: Vec<OrganiserRow>,
}

/// One organiser with portfolio tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganiserRow {
    pub organiser: Organiser,
    #[serde(rename = "eventCount")]
    pub event_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
}
