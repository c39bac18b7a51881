use serde::{Deserialize, Serialize};

use crate::domain::Event;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganiserSummaryResponse {
    #[serde(rename = "eventCount")]
    pub event_count: usize,
    #[serde(rename = "exhibitorCount")]
    pub exhibitor_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
    pub events: Vec<EventRow>,
}

/// One event with its exhibitor and capture tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
    pub event: Event,
    #[serde(rename = "exhibitorCount")]
    pub exhibitor_count: usize,
    #[serde(rename = "leadCount")]
    pub lead_count: usize,
}
