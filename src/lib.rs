// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod specs;

pub mod file;
pub mod log;
pub mod progress;
pub mod record;
pub mod render;
pub mod scrape;
pub mod store;

pub use record::Record;
pub use render::render;
pub use scrape::collect;
