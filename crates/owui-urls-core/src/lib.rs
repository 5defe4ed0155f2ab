pub mod config;
pub mod logging;

pub mod catalog;
pub mod origin;
pub mod output;
pub mod render;
