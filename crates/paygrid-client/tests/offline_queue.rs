//! Offline queue behavior against a scripted gateway: outages queue
//! payments, recovery drains them in submission order, and the retry
//! budget bounds how long a payment can wait.

use async_trait::async_trait;
use paygrid_client::transport::{PaymentTransport, TransportError};
use paygrid_client::{Client, FlushOutcome, PaymentStatus, QueueState};
use paygrid_proto::pb::paygrid::v1::{
    Account, BalanceResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    Transaction, TransactionResponse,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::{advance, Duration};

#[derive(Default)]
struct GatewayScript {
    up: AtomicBool,
    received: Mutex<Vec<String>>,
}

/// Gateway stand-in: flips between reachable and unreachable, records the
/// order payments arrive in.
#[derive(Clone, Default)]
struct ScriptedGateway(Arc<GatewayScript>);

impl ScriptedGateway {
    fn set_up(&self, up: bool) {
        self.0.up.store(up, Ordering::SeqCst);
    }

    fn received(&self) -> Vec<String> {
        self.0.received.lock().unwrap().clone()
    }

    fn check_up(&self) -> Result<(), TransportError> {
        if self.0.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(TransportError {
                message: "connection refused".to_string(),
            })
        }
    }
}

#[async_trait]
impl PaymentTransport for ScriptedGateway {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, TransportError> {
        self.check_up()?;
        Ok(RegisterResponse {
            account_number: format!("acct-{}", request.username),
            message: "Account registered successfully".to_string(),
            success: true,
        })
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, TransportError> {
        self.check_up()?;
        Ok(LoginResponse {
            account_number: format!("acct-{}", request.username),
            key: "scripted-session-key".to_string(),
            message: "Login successful".to_string(),
        })
    }

    async fn balance(&self, _request: Account) -> Result<BalanceResponse, TransportError> {
        self.check_up()?;
        Ok(BalanceResponse {
            balance_minor: 1_000_00,
            error: false,
            message: String::new(),
        })
    }

    async fn process_payment(
        &self,
        transaction: Transaction,
    ) -> Result<TransactionResponse, TransportError> {
        self.check_up()?;
        self.0.received.lock().unwrap().push(transaction.id);
        Ok(TransactionResponse {
            success: true,
            message: "Payment successful".to_string(),
        })
    }

    async fn health(&self) -> Result<bool, TransportError> {
        Ok(self.0.up.load(Ordering::SeqCst))
    }
}

async fn logged_in_client(gateway: &ScriptedGateway) -> (Client<ScriptedGateway>, String) {
    gateway.set_up(true);
    let mut client = Client::new(gateway.clone());
    client.register("alice", "pw", "bank_a", 1_000_00).await.unwrap();
    let account = client.login("alice", "pw", "bank_a").await.unwrap();
    (client, account)
}

#[tokio::test(start_paused = true)]
async fn outage_queues_payments_and_recovery_drains_them_in_order() {
    let gateway = ScriptedGateway::default();
    let (mut client, account) = logged_in_client(&gateway).await;

    gateway.set_up(false);
    for txn_id in ["q1", "q2", "q3"] {
        let status = client
            .pay(txn_id, ("bank_a", &account), ("bank_b", "acct-carol"), 10_00)
            .await
            .unwrap();
        assert!(matches!(status, PaymentStatus::Queued { .. }));
    }
    assert_eq!(client.queued(), 3);
    assert_eq!(client.queue_state(), QueueState::CoolingDown);

    gateway.set_up(true);
    let outcomes = client.run_until_drained().await;

    assert_eq!(client.queued(), 0);
    assert_eq!(gateway.received(), ["q1", "q2", "q3"]);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|flushed| matches!(
        flushed.outcome,
        FlushOutcome::Delivered { success: true, .. }
    )));
}

#[tokio::test(start_paused = true)]
async fn submissions_behind_a_nonempty_queue_stay_in_order() {
    let gateway = ScriptedGateway::default();
    let (mut client, account) = logged_in_client(&gateway).await;

    gateway.set_up(false);
    client
        .pay("a", ("bank_a", &account), ("bank_b", "x"), 1_00)
        .await
        .unwrap();
    client
        .pay("b", ("bank_a", &account), ("bank_b", "x"), 2_00)
        .await
        .unwrap();

    // Gateway back, cooldown elapsed: the next submission drains the queue
    // first and rides behind it.
    advance(Duration::from_secs(6)).await;
    gateway.set_up(true);
    let status = client
        .pay("c", ("bank_a", &account), ("bank_b", "x"), 3_00)
        .await
        .unwrap();

    match status {
        PaymentStatus::Queued { flushed } => {
            let ids: Vec<&str> = flushed.iter().map(|f| f.txn_id.as_str()).collect();
            assert_eq!(ids, ["a", "b", "c"]);
        }
        other => panic!("expected queued status, got {other:?}"),
    }
    assert_eq!(gateway.received(), ["a", "b", "c"]);
    assert_eq!(client.queued(), 0);
}

#[tokio::test(start_paused = true)]
async fn within_cooldown_submissions_enqueue_without_sending() {
    let gateway = ScriptedGateway::default();
    let (mut client, account) = logged_in_client(&gateway).await;

    gateway.set_up(false);
    client
        .pay("a", ("bank_a", &account), ("bank_b", "x"), 1_00)
        .await
        .unwrap();

    // Still inside the 5s cooldown: no retry is attempted even though the
    // gateway is back.
    gateway.set_up(true);
    advance(Duration::from_secs(2)).await;
    let status = client
        .pay("b", ("bank_a", &account), ("bank_b", "x"), 2_00)
        .await
        .unwrap();
    assert_eq!(status, PaymentStatus::Queued { flushed: Vec::new() });
    assert_eq!(client.queued(), 2);
    assert!(gateway.received().is_empty());
}

#[tokio::test(start_paused = true)]
async fn retry_budget_exhaustion_drops_and_reports() {
    let gateway = ScriptedGateway::default();
    let (mut client, account) = logged_in_client(&gateway).await;

    gateway.set_up(false);
    client
        .pay("doomed", ("bank_a", &account), ("bank_b", "x"), 1_00)
        .await
        .unwrap();

    let outcomes = client.run_until_drained().await;
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].txn_id, "doomed");
    assert_eq!(outcomes[0].outcome, FlushOutcome::Dropped { attempts: 5 });
    assert_eq!(client.queued(), 0);
    assert_eq!(client.queue_state(), QueueState::CoolingDown);
}

#[tokio::test(start_paused = true)]
async fn direct_delivery_when_gateway_is_reachable() {
    let gateway = ScriptedGateway::default();
    let (mut client, account) = logged_in_client(&gateway).await;

    let status = client
        .pay("t1", ("bank_a", &account), ("bank_b", "x"), 10_00)
        .await
        .unwrap();
    assert_eq!(
        status,
        PaymentStatus::Delivered {
            success: true,
            message: "Payment successful".to_string()
        }
    );
    assert_eq!(client.queued(), 0);
    assert!(client.gateway_up().await);
}

#[tokio::test(start_paused = true)]
async fn payment_without_session_is_refused_locally() {
    let gateway = ScriptedGateway::default();
    gateway.set_up(true);
    let mut client = Client::new(gateway.clone());

    let err = client
        .pay("t1", ("bank_a", "acct-ghost"), ("bank_b", "x"), 10_00)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("log in first"));
    assert!(gateway.received().is_empty());
}
