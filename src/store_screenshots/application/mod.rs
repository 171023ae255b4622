pub mod error;
pub mod screenshot_service;
