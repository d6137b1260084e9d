pub mod config;
pub mod logging;

pub mod app;
pub mod clipboard;
pub mod render;
pub mod store;
pub mod template;
