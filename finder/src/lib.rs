pub mod cache;
pub mod config;
pub mod display;
pub mod filter;
pub mod loader;
pub mod synthetic;

pub use filter::{ExecutionMode, FilterBackend, SearchReport};
