mod dashboard;

pub use dashboard::LeadInboxDashboard;
