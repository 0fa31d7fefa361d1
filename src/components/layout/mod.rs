pub mod footer;
pub mod panel_host;
pub mod site_layout;

pub use footer::Footer;
pub use panel_host::{PanelHost, SectionPanel};
pub use site_layout::{Site, SiteLayout};
