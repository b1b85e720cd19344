//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod navbar;
pub use navbar::Navbar;

mod routing;
pub use routing::{ListingQuery, RouterNavigation};

pub mod board;
