mod dashboard;

pub use dashboard::CompanyDashboard;
