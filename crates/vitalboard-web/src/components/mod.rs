//! Leptos UI components

mod empty_state;
mod header;
mod icon;
mod sidebar;

pub use empty_state::EmptyState;
pub use header::Header;
pub use icon::Icon;
pub use sidebar::Sidebar;
