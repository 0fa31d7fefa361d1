pub mod brand;
pub mod nav_bar;

pub use brand::Brand;
pub use nav_bar::{NavBar, NavLink};
