pub mod menu;
pub mod placement;

pub use menu::MenuState;
pub use placement::{Placement, place_float_panel};
