pub mod errors;
pub mod logging;
pub mod nameservers;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use nameservers::NameServersConfig;
pub use root::{CliOverrides, Config};
