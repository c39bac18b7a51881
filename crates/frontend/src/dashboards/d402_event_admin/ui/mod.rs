mod dashboard;

pub use dashboard::EventDashboard;
