pub mod catalog;
pub mod color;
pub mod compositor_trait;
pub mod device;
pub mod error;
pub mod layout;
pub mod screenshot;
pub mod text_overlay;
