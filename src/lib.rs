pub mod config;
pub mod error;
pub mod modules;
pub mod services;
pub mod store;

pub use error::AdminError;
