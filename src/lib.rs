pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod field;
pub mod math;
pub mod page;
pub mod scene;
pub mod timeline;
