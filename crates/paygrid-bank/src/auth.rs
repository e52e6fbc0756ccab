use crate::BankNode;
use paygrid_core::AccountError;
use paygrid_proto::pb::paygrid::v1::auth_service_server::AuthService;
use paygrid_proto::pb::paygrid::v1::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// `AuthService` over one bank's shard.
///
/// Business refusals travel as reply fields; only transport-level problems
/// become a `Status`.
#[derive(Clone)]
pub struct AuthApi {
    node: BankNode,
}

impl AuthApi {
    pub fn new(node: BankNode) -> Self {
        Self { node }
    }
}

#[tonic::async_trait]
impl AuthService for AuthApi {
    async fn register_account(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();
        let mut state = self.node.state().lock().await;

        match state
            .accounts
            .register(&req.username, &req.password, req.initial_amount_minor)
        {
            Ok(registered) => {
                info!(
                    bank = %self.node.bank_name(),
                    username = %req.username,
                    account = %registered.account_id,
                    "account registered"
                );
                Ok(Response::new(RegisterResponse {
                    account_number: registered.account_id,
                    message: "Account registered successfully".to_string(),
                    success: true,
                }))
            }
            Err(err) => Ok(Response::new(RegisterResponse {
                account_number: String::new(),
                message: err.to_string(),
                success: false,
            })),
        }
    }

    async fn login_account(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();
        let state = self.node.state().lock().await;

        if req.bank_name != state.bank_name() {
            let err = AccountError::WrongBank {
                expected: state.bank_name().to_string(),
                requested: req.bank_name,
            };
            return Ok(Response::new(LoginResponse {
                account_number: String::new(),
                key: String::new(),
                message: err.to_string(),
            }));
        }

        match state.accounts.login(&req.username, &req.password) {
            Ok(account) => {
                info!(
                    bank = %self.node.bank_name(),
                    username = %req.username,
                    account = %account.account_id,
                    "login succeeded"
                );
                Ok(Response::new(LoginResponse {
                    account_number: account.account_id.clone(),
                    key: account.session_key.clone(),
                    message: "Login successful".to_string(),
                }))
            }
            Err(err) => Ok(Response::new(LoginResponse {
                account_number: String::new(),
                key: String::new(),
                message: err.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BankNode;

    fn register_request(username: &str, initial_amount_minor: u64) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: "pw".to_string(),
            bank_name: "bank_a".to_string(),
            initial_amount_minor,
        }
    }

    #[tokio::test]
    async fn register_then_login_yields_key() {
        let node = BankNode::new("bank_a");
        let api = node.auth_api();

        let registered = api
            .register_account(Request::new(register_request("alice", 1_000_00)))
            .await
            .unwrap()
            .into_inner();
        assert!(registered.success);
        assert!(!registered.account_number.is_empty());

        let login = api
            .login_account(Request::new(LoginRequest {
                username: "alice".to_string(),
                password: "pw".to_string(),
                bank_name: "bank_a".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(login.account_number, registered.account_number);
        assert!(!login.key.is_empty());
    }

    #[tokio::test]
    async fn duplicate_username_is_refused() {
        let node = BankNode::new("bank_a");
        let api = node.auth_api();

        api.register_account(Request::new(register_request("alice", 0)))
            .await
            .unwrap();
        let second = api
            .register_account(Request::new(register_request("alice", 0)))
            .await
            .unwrap()
            .into_inner();
        assert!(!second.success);
        assert!(second.message.contains("already registered"));
    }

    #[tokio::test]
    async fn login_at_wrong_bank_is_refused() {
        let node = BankNode::new("bank_a");
        let api = node.auth_api();

        api.register_account(Request::new(register_request("alice", 0)))
            .await
            .unwrap();
        let login = api
            .login_account(Request::new(LoginRequest {
                username: "alice".to_string(),
                password: "pw".to_string(),
                bank_name: "bank_b".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(login.key.is_empty());
        assert!(login.message.contains("bank_a"));
    }

    #[tokio::test]
    async fn bad_credentials_are_refused() {
        let node = BankNode::new("bank_a");
        let api = node.auth_api();

        api.register_account(Request::new(register_request("alice", 0)))
            .await
            .unwrap();
        let login = api
            .login_account(Request::new(LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
                bank_name: "bank_a".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(login.key.is_empty());
        assert_eq!(login.message, "invalid credentials");
    }
}
