use crate::coordinator::{Participant, TwoPhaseCoordinator};
use crate::link::BankLink;
use paygrid_proto::pb::paygrid::v1::gateway_service_server::GatewayService;
use paygrid_proto::pb::paygrid::v1::{
    Account, BalanceResponse, HealthCheckRequest, HealthCheckResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse, Transaction, TransactionResponse,
};
use std::collections::HashMap;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::info;

fn unknown_bank(bank: &str) -> String {
    format!("unknown bank '{bank}'")
}

/// `GatewayService`: forwards auth and balance RPCs to the owning bank and
/// coordinates payments across participants.
///
/// Holds only the immutable link map, so concurrent requests share nothing
/// mutable.
#[derive(Clone)]
pub struct GatewayApi {
    links: HashMap<String, Arc<dyn BankLink>>,
}

impl GatewayApi {
    pub fn new(links: HashMap<String, Arc<dyn BankLink>>) -> Self {
        Self { links }
    }

    /// Participant list in stable order: sender's bank first, recipient's
    /// second, collapsed to one entry for intra-bank transfers.
    fn participants(&self, from_bank: &str, to_bank: &str) -> Vec<Participant> {
        let mut participants = Vec::with_capacity(2);
        if let Some(link) = self.links.get(from_bank) {
            participants.push(Participant {
                bank: from_bank.to_string(),
                link: link.clone(),
            });
        }
        if from_bank != to_bank {
            if let Some(link) = self.links.get(to_bank) {
                participants.push(Participant {
                    bank: to_bank.to_string(),
                    link: link.clone(),
                });
            }
        }
        participants
    }
}

#[tonic::async_trait]
impl GatewayService for GatewayApi {
    async fn register_account(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();
        let Some(link) = self.links.get(&req.bank_name) else {
            return Ok(Response::new(RegisterResponse {
                account_number: String::new(),
                message: unknown_bank(&req.bank_name),
                success: false,
            }));
        };
        match link.register(req).await {
            Ok(response) => Ok(Response::new(response)),
            Err(err) => Err(Status::unavailable(err.to_string())),
        }
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();
        let Some(link) = self.links.get(&req.bank_name) else {
            return Ok(Response::new(LoginResponse {
                account_number: String::new(),
                key: String::new(),
                message: unknown_bank(&req.bank_name),
            }));
        };
        match link.login(req).await {
            Ok(response) => Ok(Response::new(response)),
            Err(err) => Err(Status::unavailable(err.to_string())),
        }
    }

    async fn get_balance(
        &self,
        request: Request<Account>,
    ) -> Result<Response<BalanceResponse>, Status> {
        let req = request.into_inner();
        let Some(link) = self.links.get(&req.bank_name) else {
            return Ok(Response::new(BalanceResponse {
                balance_minor: 0,
                error: true,
                message: unknown_bank(&req.bank_name),
            }));
        };
        match link.balance(req).await {
            Ok(response) => Ok(Response::new(response)),
            Err(err) => Err(Status::unavailable(err.to_string())),
        }
    }

    async fn process_payment(
        &self,
        request: Request<Transaction>,
    ) -> Result<Response<TransactionResponse>, Status> {
        let txn = request.into_inner();

        // Reject before any bank sees the transaction.
        for bank in [&txn.from_bank, &txn.to_bank] {
            if !self.links.contains_key(bank.as_str()) {
                return Ok(Response::new(TransactionResponse {
                    success: false,
                    message: unknown_bank(bank),
                }));
            }
        }
        if txn.amount_minor == 0 {
            return Ok(Response::new(TransactionResponse {
                success: false,
                message: "invalid amount: transfers must move a positive amount".to_string(),
            }));
        }

        info!(
            txn = %txn.id,
            from_bank = %txn.from_bank,
            to_bank = %txn.to_bank,
            amount_minor = txn.amount_minor,
            "payment accepted for coordination"
        );

        let coordinator = TwoPhaseCoordinator::new(self.participants(&txn.from_bank, &txn.to_bank));
        let outcome = coordinator.run(&txn).await;

        Ok(Response::new(TransactionResponse {
            success: outcome.success(),
            message: outcome.message(),
        }))
    }

    async fn health_check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse { up: true }))
    }
}
