use anyhow::Context;
use clap::Parser;
use paygrid_core::BankDirectory;
use paygrid_gateway::{BankLink, GatewayApi, GrpcBankLink};
use paygrid_proto::pb::paygrid::v1::gateway_service_server::GatewayServiceServer;
use paygrid_proto::{RpcLogLayer, TlsMaterial};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Server;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "paygrid-gateway", version, about = "paygrid gateway node")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:50051
    #[arg(long, default_value = "127.0.0.1:50051")]
    listen: SocketAddr,
    /// Bank directory entry, repeatable: --bank bank_a=127.0.0.1:50055
    #[arg(long = "bank", value_name = "NAME=HOST:PORT", required = true)]
    banks: Vec<String>,
    /// Directory holding ca.crt, gateway.crt, gateway.key
    #[arg(long, default_value = "certs")]
    certs_dir: PathBuf,
    /// Domain expected on bank certificates
    #[arg(long, default_value = "localhost")]
    tls_domain: String,
    /// Per-call deadline for gateway-to-bank RPCs, in seconds
    #[arg(long, default_value_t = 5)]
    rpc_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "paygrid_gateway=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let directory = BankDirectory::from_entries(&cli.banks).context("parsing bank directory")?;
    let tls = TlsMaterial::load(&cli.certs_dir, "gateway")
        .context("loading TLS material for role 'gateway'")?;

    let timeout = Duration::from_secs(cli.rpc_timeout_secs);
    let mut links: HashMap<String, Arc<dyn BankLink>> = HashMap::new();
    for (bank, address) in directory.iter() {
        let link = GrpcBankLink::connect_lazy(bank, address, &tls, &cli.tls_domain, timeout)
            .with_context(|| format!("building channel to bank '{bank}' at {address}"))?;
        links.insert(bank.to_string(), Arc::new(link));
    }
    info!(listen = %cli.listen, banks = directory.len(), "gateway starting");

    Server::builder()
        .tls_config(tls.server_config())
        .context("applying server TLS configuration")?
        .layer(RpcLogLayer)
        .add_service(GatewayServiceServer::new(GatewayApi::new(links)))
        .serve(cli.listen)
        .await
        .context("gateway server terminated")?;

    Ok(())
}
