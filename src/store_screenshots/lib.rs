//! Composites App Store marketing screenshots: a gradient background, centered
//! headlines and the captured screen inside a rounded device frame, rendered for each
//! required device size.

pub mod application;
pub mod domain;
pub mod infrastructure;
