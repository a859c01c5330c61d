use ferrous_resolv_domain::Config;
use ferrous_resolv_infrastructure::NameServers;
use tracing::{info, warn};

pub fn build_nameservers(config: &Config) -> anyhow::Result<NameServers> {
    let servers = &config.nameservers.servers;
    info!(
        configured = servers.len(),
        default_port = config.nameservers.default_port,
        "Building nameserver pool"
    );

    NameServers::new(servers, config.nameservers.default_port).map_err(|e| {
        warn!(error = %e, "Rejected nameserver configuration");
        anyhow::anyhow!(e)
    })
}
