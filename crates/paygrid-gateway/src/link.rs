use async_trait::async_trait;
use paygrid_proto::pb::paygrid::v1::auth_service_client::AuthServiceClient;
use paygrid_proto::pb::paygrid::v1::bank_service_client::BankServiceClient;
use paygrid_proto::pb::paygrid::v1::{
    Account, BalanceResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    Transaction,
};
use paygrid_proto::TlsMaterial;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

/// Transport failure reaching a bank. Business refusals are reply fields
/// and never surface as a `LinkError`.
#[derive(Debug, Clone, Error)]
#[error("bank '{bank}' unreachable: {message}")]
pub struct LinkError {
    pub bank: String,
    pub message: String,
}

/// The gateway's view of one participant.
///
/// Forwarding handlers and the coordinator speak to banks only through this
/// seam, so tests can substitute scripted participants for the network.
#[async_trait]
pub trait BankLink: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, LinkError>;
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, LinkError>;
    async fn balance(&self, request: Account) -> Result<BalanceResponse, LinkError>;
    async fn prepare(&self, transaction: Transaction) -> Result<bool, LinkError>;
    async fn commit(&self, transaction: Transaction) -> Result<bool, LinkError>;
    async fn abort(&self, transaction: Transaction) -> Result<bool, LinkError>;
}

/// One pooled mTLS channel per directory entry, dialed lazily at startup
/// and cloned per call; the gateway never re-establishes TLS for a
/// forwarded RPC.
#[derive(Debug, Clone)]
pub struct GrpcBankLink {
    bank: String,
    channel: Channel,
}

impl GrpcBankLink {
    /// Builds the channel without connecting; the first RPC dials. Every
    /// call on the channel carries `timeout` as its deadline.
    pub fn connect_lazy(
        bank: impl Into<String>,
        address: &str,
        tls: &TlsMaterial,
        domain: &str,
        timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let endpoint = Endpoint::from_shared(format!("https://{address}"))?
            .timeout(timeout)
            .tls_config(tls.client_config(domain))?;
        Ok(Self {
            bank: bank.into(),
            channel: endpoint.connect_lazy(),
        })
    }

    fn error(&self, status: tonic::Status) -> LinkError {
        LinkError {
            bank: self.bank.clone(),
            message: status.to_string(),
        }
    }
}

#[async_trait]
impl BankLink for GrpcBankLink {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, LinkError> {
        let mut client = AuthServiceClient::new(self.channel.clone());
        let response = client
            .register_account(request)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner())
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, LinkError> {
        let mut client = AuthServiceClient::new(self.channel.clone());
        let response = client
            .login_account(request)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner())
    }

    async fn balance(&self, request: Account) -> Result<BalanceResponse, LinkError> {
        let mut client = BankServiceClient::new(self.channel.clone());
        let response = client
            .get_balance(request)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner())
    }

    async fn prepare(&self, transaction: Transaction) -> Result<bool, LinkError> {
        let mut client = BankServiceClient::new(self.channel.clone());
        let response = client
            .prepare(transaction)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner().can_commit)
    }

    async fn commit(&self, transaction: Transaction) -> Result<bool, LinkError> {
        let mut client = BankServiceClient::new(self.channel.clone());
        let response = client
            .commit(transaction)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner().success)
    }

    async fn abort(&self, transaction: Transaction) -> Result<bool, LinkError> {
        let mut client = BankServiceClient::new(self.channel.clone());
        let response = client
            .abort(transaction)
            .await
            .map_err(|status| self.error(status))?;
        Ok(response.into_inner().success)
    }
}
