pub mod buyers;
pub mod common;
pub mod contact;
pub mod faq;
pub mod landing;
pub mod sellers;

pub use buyers::BuyersPanel;
pub use common::{FeatureCardView, SectionHeading};
pub use contact::ContactPanel;
pub use faq::{FaqItem, FaqList, FaqPanel};
pub use landing::LandingPanel;
pub use sellers::SellersPanel;
