use anyhow::Context;
use clap::Parser;
use paygrid_bank::BankNode;
use paygrid_proto::pb::paygrid::v1::auth_service_server::AuthServiceServer;
use paygrid_proto::pb::paygrid::v1::bank_service_server::BankServiceServer;
use paygrid_proto::{RpcLogLayer, TlsMaterial};
use std::net::SocketAddr;
use std::path::PathBuf;
use tonic::transport::Server;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "paygrid-bank", version, about = "paygrid bank participant node")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:50055
    #[arg(long, default_value = "127.0.0.1:50055")]
    listen: SocketAddr,
    /// Bank name this node owns, e.g. bank_a
    #[arg(long)]
    bank_name: String,
    /// Directory holding ca.crt, <bank_name>.crt, <bank_name>.key
    #[arg(long, default_value = "certs")]
    certs_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "paygrid_bank=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let tls = TlsMaterial::load(&cli.certs_dir, &cli.bank_name)
        .with_context(|| format!("loading TLS material for role '{}'", cli.bank_name))?;

    let node = BankNode::new(cli.bank_name.clone());
    info!(bank = %cli.bank_name, listen = %cli.listen, "bank node starting");

    Server::builder()
        .tls_config(tls.server_config())
        .context("applying server TLS configuration")?
        .layer(RpcLogLayer)
        .add_service(AuthServiceServer::new(node.auth_api()))
        .add_service(BankServiceServer::new(node.bank_api()))
        .serve(cli.listen)
        .await
        .context("bank server terminated")?;

    Ok(())
}
