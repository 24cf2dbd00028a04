pub mod config;
pub mod converter;
pub mod error;
pub mod sizes;

pub use config::*;
pub use converter::*;
pub use sizes::*;
