//! Views
//!
//! One component per route.

mod call_detail;
mod calls;
mod dashboard;
mod login;
mod projects;

pub use call_detail::CallDetailPage;
pub use calls::CallsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
