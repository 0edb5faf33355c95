use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "polygon-gateway")]
#[command(about = "HTTP gateway for a Polygon node's JSON-RPC interface", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file",
        default_value = "data/config.toml"
    )]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        rpc: RpcArgs,
    },
    /// Print the latest block number reported by the node
    BlockNumber {
        #[command(flatten)]
        rpc: RpcArgs,
    },
    /// Print a block by its hex-encoded number
    Block {
        #[arg(short, long, help = "Block number in hex format (e.g. 0x134e82a)")]
        block_number: String,
        #[arg(
            short,
            long,
            help = "Whether to include full transaction details",
            default_value_t = true,
            action = ArgAction::Set
        )]
        include_transactions: bool,
        #[command(flatten)]
        rpc: RpcArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RpcArgs {
    #[arg(short = 'u', long, env = "POLYGON_RPC_URL", help = "JSON-RPC endpoint of the Polygon node")]
    pub rpc_url: Option<String>,
    #[arg(long, help = "Overall timeout in seconds for a single node call")]
    pub rpc_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServerArgs {
    #[arg(long, env = "API_HOST", help = "Address the API server binds to")]
    pub host: Option<String>,
    #[arg(short, long, env = "API_PORT", help = "Port for the API server")]
    pub port: Option<u16>,
}

/// Applies command line overrides on top of file and environment configuration.
pub trait ApplyArgs {
    fn apply_rpc(&mut self, args: &RpcArgs);
    fn apply_server(&mut self, args: &ServerArgs);
}
