pub mod d400_lead_inbox;
pub mod d401_company_admin;
pub mod d402_event_admin;
pub mod d403_event_organiser;
pub mod d404_super_admin;

pub use d400_lead_inbox::ui::LeadInboxDashboard;
pub use d401_company_admin::ui::CompanyDashboard;
pub use d402_event_admin::ui::EventDashboard;
pub use d403_event_organiser::ui::OrganiserDashboard;
pub use d404_super_admin::ui::SystemDashboard;
