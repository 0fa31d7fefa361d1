pub mod use_disclosure;
pub mod use_navigation;
pub mod use_site_config;

pub use use_disclosure::{use_disclosure, DisclosureState};
pub use use_navigation::{use_navigation, use_navigation_provider, NavigationState};
pub use use_site_config::use_site_config;
