pub mod dashboard;
pub mod session;

pub use dashboard::DashboardSession;
pub use session::ChatSession;
