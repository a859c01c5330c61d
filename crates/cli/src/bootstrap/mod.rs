mod logging;
mod nameservers;

pub use logging::init_logging;
pub use nameservers::build_nameservers;

use ferrous_resolv_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
