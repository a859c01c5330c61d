//! Ferrous Resolv Domain Layer
pub mod address;
pub mod config;
pub mod errors;

pub use address::{Address, AddressFamily, AddressInput};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, NameServersConfig};
pub use errors::DomainError;
