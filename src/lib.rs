//! Transactivate - marketing site for the SBIR data rights marketplace.
//!
//! The whole behavioral surface is two pieces of UI state:
//! - which panel is active ([`controllers::Navigator`])
//! - which FAQ entries are expanded ([`controllers::DisclosureList`])
//!
//! Everything else is static copy rendered from those two states.

pub mod components;
pub mod config;
pub mod content;
pub mod controllers;
pub mod error;
pub mod hooks;
pub mod transition;
pub mod types;

pub use components::layout::Site;
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use types::Section;
