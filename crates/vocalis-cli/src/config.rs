//! Command-line configuration.

use std::net::IpAddr;

use clap::Parser;

/// Default port for the record service.
pub const DEFAULT_PORT: u16 = 8765;

/// Command-line arguments for the record service.
#[derive(Debug, Parser)]
#[command(name = "vocalis", about = "Serves the vocalis mock record endpoint")]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
