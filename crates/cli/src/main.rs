use clap::Parser;
use ferrous_resolv_domain::CliOverrides;
use tracing::{info, warn};

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-resolv")]
#[command(version)]
#[command(about = "Ferrous Resolv - nameserver pool inspector")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Extra nameserver (repeatable), e.g. 8.8.8.8, [::1]:53, dns.google:853
    #[arg(short = 's', long = "server", value_name = "SPEC")]
    servers: Vec<String>,

    /// Port used for nameservers given without one
    #[arg(short = 'p', long)]
    default_port: Option<u16>,

    /// Number of random nameservers to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pick: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.servers,
        default_port: cli.default_port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Resolv v{}", env!("CARGO_PKG_VERSION"));

    let nameservers = bootstrap::build_nameservers(&config)?;
    let default_port = nameservers.default_port();

    if nameservers.is_empty() {
        warn!("No nameservers configured");
        return Ok(());
    }

    println!("{} nameserver(s):", nameservers.len());
    for addr in &nameservers {
        println!(
            "  {:<40} {}",
            addr.to_display_string(Some(default_port)),
            addr.family().as_str()
        );
    }

    for _ in 0..cli.pick {
        let picked = nameservers.pick_random()?;
        println!("picked {}", picked.to_display_string(Some(default_port)));
    }

    Ok(())
}
