//! vitalboard-types - Shared data types for vitalboard
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - vitalboard-web (frontend WASM)
//! - vitalboard-web server handlers (session API)

pub mod nav;
pub mod theme;
pub mod user;

pub use nav::{route_matches, IconKind, NavItem, NavSection, NAV_SECTIONS};
pub use theme::{ColorScheme, Theme};
pub use user::CurrentUser;
