mod dashboard;

pub use dashboard::OrganiserDashboard;
