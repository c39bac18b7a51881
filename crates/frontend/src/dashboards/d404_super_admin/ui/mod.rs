mod dashboard;

pub use dashboard::SystemDashboard;
