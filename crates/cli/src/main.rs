use clap::{Parser, Subcommand};
use nameroute_domain::CliOverrides;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "nameroute")]
#[command(version)]
#[command(about = "Resolve blockchain domain names through ENS, ZNS, CNS or the naming API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Resolve through the centralized API instead of the blockchains
    #[arg(long, global = true)]
    proxy: bool,

    /// API endpoint used in proxy mode
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every known address and the ownership metadata as JSON
    Resolve { domain: String },

    /// Address for one currency ticker
    Address {
        domain: String,
        ticker: String,
        /// Fail instead of printing nothing when there is no address
        #[arg(long)]
        strict: bool,
    },

    /// Owner address
    Owner { domain: String },

    /// IPFS content hash
    IpfsHash { domain: String },

    /// IPFS redirect URL
    IpfsRedirect { domain: String },

    /// Whois email
    Email { domain: String },

    /// Arbitrary record by key, e.g. `ipfs.html.value`
    Record { domain: String, key: String },

    /// Namehash of the domain under its protocol's algorithm
    Namehash { domain: String },

    /// Protocol that owns the domain
    ServiceName { domain: String },

    /// Whether the domain is supported, and on the configured network
    Supported { domain: String },

    /// Domain name registered for an address
    Reverse {
        address: String,
        #[arg(default_value = "ETH")]
        ticker: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        proxy: cli.proxy,
        api_url: cli.api_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    debug!("nameroute v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_backend_plan(&config);

    let resolution = di::build_resolution(&config)?;

    let output = commands::run(&resolution, cli.command).await?;
    if let Some(output) = output {
        println!("{output}");
    }
    Ok(())
}
