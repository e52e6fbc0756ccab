use crate::BankNode;
use paygrid_core::TransferRequest;
use paygrid_proto::pb::paygrid::v1::bank_service_server::BankService;
use paygrid_proto::pb::paygrid::v1::{
    Account, BalanceResponse, OperationResponse, PrepareResponse, Transaction,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// `BankService` over one bank's shard: authorized balance reads and the
/// participant side of two-phase commit.
#[derive(Clone)]
pub struct BankApi {
    node: BankNode,
}

impl BankApi {
    pub fn new(node: BankNode) -> Self {
        Self { node }
    }
}

#[tonic::async_trait]
impl BankService for BankApi {
    async fn get_balance(
        &self,
        request: Request<Account>,
    ) -> Result<Response<BalanceResponse>, Status> {
        let req = request.into_inner();
        let state = self.node.state().lock().await;

        match state.accounts.balance(&req.number, &req.key) {
            Ok(balance_minor) => Ok(Response::new(BalanceResponse {
                balance_minor,
                error: false,
                message: String::new(),
            })),
            Err(err) => Ok(Response::new(BalanceResponse {
                balance_minor: 0,
                error: true,
                message: err.to_string(),
            })),
        }
    }

    async fn prepare(
        &self,
        request: Request<Transaction>,
    ) -> Result<Response<PrepareResponse>, Status> {
        let transfer = TransferRequest::from(request.into_inner());
        let mut state = self.node.state().lock().await;

        let can_commit = state.prepare(&transfer);
        info!(
            bank = %self.node.bank_name(),
            txn = %transfer.txn_id,
            can_commit,
            "prepare voted"
        );
        Ok(Response::new(PrepareResponse { can_commit }))
    }

    async fn commit(
        &self,
        request: Request<Transaction>,
    ) -> Result<Response<OperationResponse>, Status> {
        let txn = request.into_inner();
        let mut state = self.node.state().lock().await;

        let success = state.commit(&txn.id, &txn.to_account);
        info!(bank = %self.node.bank_name(), txn = %txn.id, success, "commit applied");
        Ok(Response::new(OperationResponse { success }))
    }

    async fn abort(
        &self,
        request: Request<Transaction>,
    ) -> Result<Response<OperationResponse>, Status> {
        let txn = request.into_inner();
        let mut state = self.node.state().lock().await;

        let success = state.abort(&txn.id, &txn.from_account);
        info!(bank = %self.node.bank_name(), txn = %txn.id, success, "abort applied");
        Ok(Response::new(OperationResponse { success }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paygrid_proto::pb::paygrid::v1::auth_service_server::AuthService;
    use paygrid_proto::pb::paygrid::v1::RegisterRequest;

    async fn register(node: &BankNode, username: &str, initial_minor: u64) -> (String, String) {
        let response = node
            .auth_api()
            .register_account(Request::new(RegisterRequest {
                username: username.to_string(),
                password: "pw".to_string(),
                bank_name: node.bank_name().to_string(),
                initial_amount_minor: initial_minor,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(response.success);

        let state = node.state().lock().await;
        let key = state.accounts.login(username, "pw").unwrap().session_key.clone();
        (response.account_number, key)
    }

    fn transaction(txn_id: &str, from: (&str, &str), to: (&str, &str), amount: u64) -> Transaction {
        Transaction {
            id: txn_id.to_string(),
            from_account: from.1.to_string(),
            from_bank: from.0.to_string(),
            to_account: to.1.to_string(),
            to_bank: to.0.to_string(),
            amount_minor: amount,
            timestamp_unix_ms: 0,
            key: String::new(),
        }
    }

    #[tokio::test]
    async fn balance_is_gated_on_the_session_key() {
        let node = BankNode::new("bank_a");
        let (account, key) = register(&node, "alice", 500_00).await;
        let api = node.bank_api();

        let ok = api
            .get_balance(Request::new(Account {
                number: account.clone(),
                bank_name: "bank_a".to_string(),
                key,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!ok.error);
        assert_eq!(ok.balance_minor, 500_00);

        let denied = api
            .get_balance(Request::new(Account {
                number: account,
                bank_name: "bank_a".to_string(),
                key: "forged".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(denied.error);
        assert_eq!(denied.balance_minor, 0);
        assert_eq!(denied.message, "unauthorized");
    }

    #[tokio::test]
    async fn prepare_commit_moves_funds_between_shard_accounts() {
        let node = BankNode::new("bank_a");
        let (alice, alice_key) = register(&node, "alice", 1_000_00).await;
        let (bob, bob_key) = register(&node, "bob", 500_00).await;
        let api = node.bank_api();

        let prepared = api
            .prepare(Request::new(transaction(
                "t1",
                ("bank_a", &alice),
                ("bank_a", &bob),
                200_00,
            )))
            .await
            .unwrap()
            .into_inner();
        assert!(prepared.can_commit);

        let committed = api
            .commit(Request::new(transaction(
                "t1",
                ("bank_a", &alice),
                ("bank_a", &bob),
                200_00,
            )))
            .await
            .unwrap()
            .into_inner();
        assert!(committed.success);

        let state = node.state().lock().await;
        assert_eq!(state.accounts.balance(&alice, &alice_key), Ok(800_00));
        assert_eq!(state.accounts.balance(&bob, &bob_key), Ok(700_00));
        assert_eq!(state.prepared_len(), 0);
    }

    #[tokio::test]
    async fn duplicate_prepare_votes_no() {
        let node = BankNode::new("bank_a");
        let (alice, _) = register(&node, "alice", 1_000_00).await;
        let api = node.bank_api();
        let txn = transaction("t1", ("bank_a", &alice), ("bank_b", "remote"), 100_00);

        assert!(api
            .prepare(Request::new(txn.clone()))
            .await
            .unwrap()
            .into_inner()
            .can_commit);
        assert!(!api
            .prepare(Request::new(txn))
            .await
            .unwrap()
            .into_inner()
            .can_commit);
    }

    #[tokio::test]
    async fn commit_without_prepare_reports_failure() {
        let node = BankNode::new("bank_a");
        let (alice, _) = register(&node, "alice", 100).await;
        let api = node.bank_api();

        let txn = transaction("never", ("bank_a", &alice), ("bank_a", &alice), 10);
        assert!(!api.commit(Request::new(txn.clone())).await.unwrap().into_inner().success);
        assert!(!api.abort(Request::new(txn)).await.unwrap().into_inner().success);
    }
}
