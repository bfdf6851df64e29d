//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

pub mod content;
pub mod hooks;
pub mod nav;

mod components;
pub use components::*;
