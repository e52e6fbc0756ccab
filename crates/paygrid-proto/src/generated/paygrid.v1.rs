// @generated
// Generated from: proto/paygrid/v1/paygrid.proto
// Manual check-in for offline builds.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterRequest {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bank_name: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub initial_amount_minor: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterResponse {
    #[prost(string, tag = "1")]
    pub account_number: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bank_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginResponse {
    #[prost(string, tag = "1")]
    pub account_number: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub number: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub bank_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub key: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BalanceResponse {
    #[prost(uint64, tag = "1")]
    pub balance_minor: u64,
    #[prost(bool, tag = "2")]
    pub error: bool,
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub from_account: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub from_bank: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub to_account: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub to_bank: ::prost::alloc::string::String,
    #[prost(uint64, tag = "6")]
    pub amount_minor: u64,
    #[prost(int64, tag = "7")]
    pub timestamp_unix_ms: i64,
    #[prost(string, tag = "8")]
    pub key: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrepareResponse {
    #[prost(bool, tag = "1")]
    pub can_commit: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckResponse {
    #[prost(bool, tag = "1")]
    pub up: bool,
}

pub mod auth_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct AuthServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl AuthServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> AuthServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn register_account(
            &mut self,
            request: impl tonic::IntoRequest<super::RegisterRequest>,
        ) -> Result<tonic::Response<super::RegisterResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.AuthService/RegisterAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn login_account(
            &mut self,
            request: impl tonic::IntoRequest<super::LoginRequest>,
        ) -> Result<tonic::Response<super::LoginResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.AuthService/LoginAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod bank_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct BankServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl BankServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> BankServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_balance(
            &mut self,
            request: impl tonic::IntoRequest<super::Account>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.BankService/GetBalance",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn prepare(
            &mut self,
            request: impl tonic::IntoRequest<super::Transaction>,
        ) -> Result<tonic::Response<super::PrepareResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.BankService/Prepare",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn commit(
            &mut self,
            request: impl tonic::IntoRequest<super::Transaction>,
        ) -> Result<tonic::Response<super::OperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.BankService/Commit",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn abort(
            &mut self,
            request: impl tonic::IntoRequest<super::Transaction>,
        ) -> Result<tonic::Response<super::OperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.BankService/Abort",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct GatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl GatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> GatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn register_account(
            &mut self,
            request: impl tonic::IntoRequest<super::RegisterRequest>,
        ) -> Result<tonic::Response<super::RegisterResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.GatewayService/RegisterAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn login(
            &mut self,
            request: impl tonic::IntoRequest<super::LoginRequest>,
        ) -> Result<tonic::Response<super::LoginResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.GatewayService/Login",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_balance(
            &mut self,
            request: impl tonic::IntoRequest<super::Account>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.GatewayService/GetBalance",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn process_payment(
            &mut self,
            request: impl tonic::IntoRequest<super::Transaction>,
        ) -> Result<tonic::Response<super::TransactionResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.GatewayService/ProcessPayment",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn health_check(
            &mut self,
            request: impl tonic::IntoRequest<super::HealthCheckRequest>,
        ) -> Result<tonic::Response<super::HealthCheckResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/paygrid.v1.GatewayService/HealthCheck",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod auth_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait AuthService: Send + Sync + 'static {
        async fn register_account(
            &self,
            request: tonic::Request<super::RegisterRequest>,
        ) -> Result<tonic::Response<super::RegisterResponse>, tonic::Status>;
        async fn login_account(
            &self,
            request: tonic::Request<super::LoginRequest>,
        ) -> Result<tonic::Response<super::LoginResponse>, tonic::Status>;
    }

    #[derive(Debug, Clone)]
    pub struct AuthServiceServer<T: AuthService> {
        inner: Arc<T>,
    }

    impl<T: AuthService> AuthServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self {
                inner: Arc::new(inner),
            }
        }
    }

    impl<T: AuthService> Service<http::Request<tonic::body::BoxBody>> for AuthServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/paygrid.v1.AuthService/RegisterAccount" => {
                    struct RegisterAccountSvc<T: AuthService>(pub Arc<T>);
                    impl<T: AuthService> tonic::server::UnaryService<super::RegisterRequest>
                        for RegisterAccountSvc<T>
                    {
                        type Response = super::RegisterResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RegisterRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.register_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = RegisterAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.AuthService/LoginAccount" => {
                    struct LoginAccountSvc<T: AuthService>(pub Arc<T>);
                    impl<T: AuthService> tonic::server::UnaryService<super::LoginRequest> for LoginAccountSvc<T> {
                        type Response = super::LoginResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::LoginRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.login_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = LoginAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: AuthService> tonic::server::NamedService for AuthServiceServer<T> {
        const NAME: &'static str = "paygrid.v1.AuthService";
    }
}

pub mod bank_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait BankService: Send + Sync + 'static {
        async fn get_balance(
            &self,
            request: tonic::Request<super::Account>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status>;
        async fn prepare(
            &self,
            request: tonic::Request<super::Transaction>,
        ) -> Result<tonic::Response<super::PrepareResponse>, tonic::Status>;
        async fn commit(
            &self,
            request: tonic::Request<super::Transaction>,
        ) -> Result<tonic::Response<super::OperationResponse>, tonic::Status>;
        async fn abort(
            &self,
            request: tonic::Request<super::Transaction>,
        ) -> Result<tonic::Response<super::OperationResponse>, tonic::Status>;
    }

    #[derive(Debug, Clone)]
    pub struct BankServiceServer<T: BankService> {
        inner: Arc<T>,
    }

    impl<T: BankService> BankServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self {
                inner: Arc::new(inner),
            }
        }
    }

    impl<T: BankService> Service<http::Request<tonic::body::BoxBody>> for BankServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/paygrid.v1.BankService/GetBalance" => {
                    struct GetBalanceSvc<T: BankService>(pub Arc<T>);
                    impl<T: BankService> tonic::server::UnaryService<super::Account> for GetBalanceSvc<T> {
                        type Response = super::BalanceResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(&mut self, request: tonic::Request<super::Account>) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_balance(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetBalanceSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.BankService/Prepare" => {
                    struct PrepareSvc<T: BankService>(pub Arc<T>);
                    impl<T: BankService> tonic::server::UnaryService<super::Transaction> for PrepareSvc<T> {
                        type Response = super::PrepareResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Transaction>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.prepare(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = PrepareSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.BankService/Commit" => {
                    struct CommitSvc<T: BankService>(pub Arc<T>);
                    impl<T: BankService> tonic::server::UnaryService<super::Transaction> for CommitSvc<T> {
                        type Response = super::OperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Transaction>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.commit(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = CommitSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.BankService/Abort" => {
                    struct AbortSvc<T: BankService>(pub Arc<T>);
                    impl<T: BankService> tonic::server::UnaryService<super::Transaction> for AbortSvc<T> {
                        type Response = super::OperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Transaction>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.abort(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = AbortSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: BankService> tonic::server::NamedService for BankServiceServer<T> {
        const NAME: &'static str = "paygrid.v1.BankService";
    }
}

pub mod gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait GatewayService: Send + Sync + 'static {
        async fn register_account(
            &self,
            request: tonic::Request<super::RegisterRequest>,
        ) -> Result<tonic::Response<super::RegisterResponse>, tonic::Status>;
        async fn login(
            &self,
            request: tonic::Request<super::LoginRequest>,
        ) -> Result<tonic::Response<super::LoginResponse>, tonic::Status>;
        async fn get_balance(
            &self,
            request: tonic::Request<super::Account>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status>;
        async fn process_payment(
            &self,
            request: tonic::Request<super::Transaction>,
        ) -> Result<tonic::Response<super::TransactionResponse>, tonic::Status>;
        async fn health_check(
            &self,
            request: tonic::Request<super::HealthCheckRequest>,
        ) -> Result<tonic::Response<super::HealthCheckResponse>, tonic::Status>;
    }

    #[derive(Debug, Clone)]
    pub struct GatewayServiceServer<T: GatewayService> {
        inner: Arc<T>,
    }

    impl<T: GatewayService> GatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self {
                inner: Arc::new(inner),
            }
        }
    }

    impl<T: GatewayService> Service<http::Request<tonic::body::BoxBody>> for GatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/paygrid.v1.GatewayService/RegisterAccount" => {
                    struct RegisterAccountSvc<T: GatewayService>(pub Arc<T>);
                    impl<T: GatewayService> tonic::server::UnaryService<super::RegisterRequest>
                        for RegisterAccountSvc<T>
                    {
                        type Response = super::RegisterResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RegisterRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.register_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = RegisterAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.GatewayService/Login" => {
                    struct LoginSvc<T: GatewayService>(pub Arc<T>);
                    impl<T: GatewayService> tonic::server::UnaryService<super::LoginRequest> for LoginSvc<T> {
                        type Response = super::LoginResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::LoginRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.login(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = LoginSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.GatewayService/GetBalance" => {
                    struct GetBalanceSvc<T: GatewayService>(pub Arc<T>);
                    impl<T: GatewayService> tonic::server::UnaryService<super::Account> for GetBalanceSvc<T> {
                        type Response = super::BalanceResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(&mut self, request: tonic::Request<super::Account>) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_balance(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetBalanceSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.GatewayService/ProcessPayment" => {
                    struct ProcessPaymentSvc<T: GatewayService>(pub Arc<T>);
                    impl<T: GatewayService> tonic::server::UnaryService<super::Transaction> for ProcessPaymentSvc<T> {
                        type Response = super::TransactionResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Transaction>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.process_payment(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = ProcessPaymentSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/paygrid.v1.GatewayService/HealthCheck" => {
                    struct HealthCheckSvc<T: GatewayService>(pub Arc<T>);
                    impl<T: GatewayService> tonic::server::UnaryService<super::HealthCheckRequest>
                        for HealthCheckSvc<T>
                    {
                        type Response = super::HealthCheckResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::HealthCheckRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.health_check(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = HealthCheckSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: GatewayService> tonic::server::NamedService for GatewayServiceServer<T> {
        const NAME: &'static str = "paygrid.v1.GatewayService";
    }
}
