use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "netutil")]
#[command(author, version, about = "RUDP address utilities", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "netutil.toml")]
    pub config: String,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override log directory
    #[arg(long)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the binary form of an address as hex
    ToBytes { address: String },

    /// Print the text form of a hex-encoded 4 or 16 byte address
    ToText { hex: String },

    /// Print the 32-bit network-order value of a dotted-decimal address
    ToNet { dotted: String },

    /// Print the dotted-decimal form of a 32-bit network-order value
    FromNet { value: u32 },

    /// List addresses bound to local interfaces
    Interfaces {
        /// Leave loopback addresses out
        #[arg(long)]
        no_loopback: bool,
    },

    /// Check whether each HOST:PORT is usable as a transport endpoint
    Validate {
        #[arg(required = true)]
        endpoints: Vec<String>,
    },
}
