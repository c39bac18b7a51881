//! Summary DTOs consumed by the role dashboards.

pub mod d400_lead_inbox;
pub mod d401_company_admin;
pub mod d402_event_admin;
pub mod d403_event_organiser;
pub mod d404_super_admin;
