pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod managers;
pub mod utils;

pub use components::*;
pub use config::*;
pub use error::*;
