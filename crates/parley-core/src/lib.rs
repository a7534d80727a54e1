pub mod config;
pub mod error;

pub use config::{CategoryConfig, GeneralConfig, ParleyConfig, ResponderConfig};
pub use error::{ParleyError, Result};
