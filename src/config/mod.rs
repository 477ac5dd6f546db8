pub mod loader;
pub mod themes;
pub mod types;
