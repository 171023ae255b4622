pub mod catalog_file;
pub mod device_frame;
pub mod error;
pub mod file_storage;
pub mod font;
pub mod gradient;
pub mod png_encoder;
pub mod screenshot_compositor;
pub mod text_renderer;
