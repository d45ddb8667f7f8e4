use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use url::Url;

use crate::contract::load_contract;
use crate::proxy::UpstreamClient;
use crate::runtime_config::RuntimeConfig;
use crate::server::{GatewayService, HttpServer};

/// Command-line interface for the valigate gateway
///
/// Provides commands for running the gateway and inspecting contract
/// files without starting a server.
#[derive(Parser)]
#[command(name = "valigate")]
#[command(about = "Contract-driven request validation gateway", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for valigate
#[derive(Subcommand)]
pub enum Commands {
    /// Run the gateway: validate requests against a contract and proxy
    /// conforming ones to the upstream service
    Serve {
        /// Path to the contract file (YAML or JSON)
        #[arg(short, long)]
        contract: PathBuf,

        /// Base URL of the upstream service requests are forwarded to
        #[arg(short, long, env = "VALIGATE_UPSTREAM")]
        upstream: Url,

        /// Address and port to bind the gateway to
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
    },
    /// Load a contract and print the operations it declares
    Check {
        /// Path to the contract file (YAML or JSON)
        #[arg(short, long)]
        contract: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The contract file cannot be read or parsed
/// - The upstream client cannot be constructed from the given URL
/// - The listener fails to bind to the requested address
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            contract,
            upstream,
            addr,
        } => {
            let contract = load_contract(&contract)?;
            let config = RuntimeConfig::from_env();
            let client = UpstreamClient::new(upstream, config.upstream_timeout)?;
            let service = GatewayService::new(Arc::new(contract), client);
            let server = HttpServer::bind(service, addr).await?;
            server.run().await
        }
        Commands::Check { contract } => {
            let contract = load_contract(&contract)?;
            println!("[contract] templates={}", contract.paths.len());
            for (template, item) in &contract.paths {
                for (method, operation) in item.operations() {
                    println!(
                        "[operation] {} {} params={} body_required={}",
                        method,
                        template,
                        operation.parameters.len(),
                        operation.request_body_required,
                    );
                }
            }
            Ok(())
        }
    }
}
