//! UI Components
//!
//! Reusable Leptos components.

mod error_text;
mod link;
mod nav_bar;
mod project_select;
mod stat_card;
mod upload_modal;

pub use error_text::ErrorText;
pub use link::Link;
pub use nav_bar::NavBar;
pub use project_select::ProjectSelect;
pub use stat_card::StatCard;
pub use upload_modal::UploadModal;
