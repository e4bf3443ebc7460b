pub mod scenario;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub use scenario::{ContainerSpec, ContainerType, Scenario, ShipSpec};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-fleet")]
#[command(about = "Load containers and board them onto ships")]
pub struct CliConfig {
    #[arg(long, help = "Scenario TOML file; the built-in demo runs when omitted")]
    pub scenario: Option<String>,

    #[arg(long, help = "Print ship reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
