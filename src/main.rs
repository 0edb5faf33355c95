use anyhow::Context;
use clap::Parser;
use log::info;

use polygon_gateway::{
    api::blocks::found_block,
    cli::{ApplyArgs, Cli, Commands, RpcArgs},
    config::{GatewayConfig, load_gateway_config},
    log::{init_logging, mask_url},
    rpc::RpcClient,
    server::Server,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logging()?;

    let cli = Cli::parse();
    let mut config = load_gateway_config(&cli.config)?;

    match cli.command {
        Commands::Serve { server, rpc } => {
            config.apply_server(&server);
            config.apply_rpc(&rpc);
            Server::new(config).run().await
        },
        Commands::BlockNumber { rpc } => {
            let client = build_client(&mut config, &rpc)?;
            let block_number = client.get_block_number().await?;
            println!("{}", block_number);
            Ok(())
        },
        Commands::Block {
            block_number,
            include_transactions,
            rpc,
        } => {
            let client = build_client(&mut config, &rpc)?;
            let block = client.get_block_by_number(&block_number, include_transactions).await?;
            match found_block(block) {
                Some(block) => println!("{}", serde_json::to_string_pretty(&block)?),
                None => println!("Block {} not found", block_number),
            }
            Ok(())
        },
    }
}

fn build_client(config: &mut GatewayConfig, rpc: &RpcArgs) -> Result<RpcClient, anyhow::Error> {
    config.apply_rpc(rpc);
    let endpoint = config.rpc_endpoint()?;
    info!(endpoint = &*mask_url(&endpoint); "Querying upstream node");
    RpcClient::with_timeout(endpoint, config.rpc_timeout()).context("Failed to build RPC client")
}
