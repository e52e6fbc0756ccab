use async_trait::async_trait;
use paygrid_proto::pb::paygrid::v1::gateway_service_client::GatewayServiceClient;
use paygrid_proto::pb::paygrid::v1::{
    Account, BalanceResponse, HealthCheckRequest, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, Transaction, TransactionResponse,
};
use paygrid_proto::TlsMaterial;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

/// Transport failure reaching the gateway. Payments hitting this are
/// queued for retry; other operations surface it to the caller.
#[derive(Debug, Clone, Error)]
#[error("gateway unreachable: {message}")]
pub struct TransportError {
    pub message: String,
}

impl From<tonic::Status> for TransportError {
    fn from(status: tonic::Status) -> Self {
        Self {
            message: status.to_string(),
        }
    }
}

/// The client's view of the gateway, behind a seam so tests can script
/// outages without a network.
#[async_trait]
pub trait PaymentTransport: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, TransportError>;
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, TransportError>;
    async fn balance(&self, request: Account) -> Result<BalanceResponse, TransportError>;
    async fn process_payment(
        &self,
        transaction: Transaction,
    ) -> Result<TransactionResponse, TransportError>;
    async fn health(&self) -> Result<bool, TransportError>;
}

/// Pooled mTLS channel to the gateway, dialed lazily and cloned per call.
#[derive(Debug, Clone)]
pub struct GrpcGatewayTransport {
    channel: Channel,
}

impl GrpcGatewayTransport {
    pub fn connect_lazy(
        address: &str,
        tls: &TlsMaterial,
        domain: &str,
        timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let endpoint = Endpoint::from_shared(format!("https://{address}"))?
            .timeout(timeout)
            .tls_config(tls.client_config(domain))?;
        Ok(Self {
            channel: endpoint.connect_lazy(),
        })
    }
}

#[async_trait]
impl PaymentTransport for GrpcGatewayTransport {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, TransportError> {
        let mut client = GatewayServiceClient::new(self.channel.clone());
        Ok(client.register_account(request).await?.into_inner())
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, TransportError> {
        let mut client = GatewayServiceClient::new(self.channel.clone());
        Ok(client.login(request).await?.into_inner())
    }

    async fn balance(&self, request: Account) -> Result<BalanceResponse, TransportError> {
        let mut client = GatewayServiceClient::new(self.channel.clone());
        Ok(client.get_balance(request).await?.into_inner())
    }

    async fn process_payment(
        &self,
        transaction: Transaction,
    ) -> Result<TransactionResponse, TransportError> {
        let mut client = GatewayServiceClient::new(self.channel.clone());
        Ok(client.process_payment(transaction).await?.into_inner())
    }

    async fn health(&self) -> Result<bool, TransportError> {
        let mut client = GatewayServiceClient::new(self.channel.clone());
        Ok(client
            .health_check(HealthCheckRequest {})
            .await?
            .into_inner()
            .up)
    }
}
