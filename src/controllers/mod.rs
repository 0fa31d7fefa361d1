pub mod disclosure;
pub mod navigation;

pub use disclosure::DisclosureList;
pub use navigation::{Navigator, PanelSlot};
