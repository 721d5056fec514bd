pub mod overlay;
pub mod render;
pub mod screens;
pub mod theme;

pub use overlay::{OverlayMessage, OverlayStyle};
pub use render::render;
