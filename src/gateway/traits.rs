//! Trait abstraction for the auth gateway to enable mocking in tests

use crate::state::{
    LoginGrant, LoginRequest, RegisteredUser, RegistrationRequest, ResetReceipt, ResetRequest,
};
use async_trait::async_trait;
use thiserror::Error;

/// Classified failure of one submission attempt. The display strings are
/// the user-facing toast messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Connection timeout. Please check your network.")]
    Timeout,
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Invalid credentials. Please verify your email and password.")]
    InvalidCredentials,
    #[error("Email address not found in our system.")]
    EmailNotFound,
}

/// Backend capability for the three portal operations. Production uses
/// the simulated gateway; tests inject deterministic mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create a new account
    async fn register(&self, request: RegistrationRequest)
        -> Result<RegisteredUser, GatewayError>;

    /// Authenticate and obtain a session token
    async fn login(&self, request: LoginRequest) -> Result<LoginGrant, GatewayError>;

    /// Request password reset instructions for an address
    async fn reset_password(&self, request: ResetRequest) -> Result<ResetReceipt, GatewayError>;
}
