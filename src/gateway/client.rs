//! Simulated auth backend
//!
//! Models a network round-trip as a fixed delay followed by a weighted
//! outcome roll: success, transport failure, or an operation-specific
//! domain rejection. Rolls are independent per call and unseeded.

use super::traits::{AuthGateway, GatewayError};
use crate::state::{
    AccountProfile, LoginGrant, LoginRequest, RegisteredUser, RegistrationRequest, ResetReceipt,
    ResetRequest,
};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

/// Simulated round-trip latency per operation
pub const REGISTER_DELAY: Duration = Duration::from_millis(3000);
pub const LOGIN_DELAY: Duration = Duration::from_millis(2500);
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// Default outcome split: 10% transport failure, 10% domain rejection,
/// 80% success
const TRANSPORT_FAILURE_ODDS: f64 = 0.1;
const DOMAIN_REJECTION_ODDS: f64 = 0.1;

enum Roll {
    Transport,
    Domain,
    Success,
}

/// In-process stand-in for the portal backend
pub struct SimulatedGateway {
    transport_odds: f64,
    rejection_odds: f64,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self {
            transport_odds: TRANSPORT_FAILURE_ODDS,
            rejection_odds: DOMAIN_REJECTION_ODDS,
        }
    }

    #[cfg(test)]
    fn with_odds(transport_odds: f64, rejection_odds: f64) -> Self {
        Self {
            transport_odds,
            rejection_odds,
        }
    }

    fn roll(&self) -> Roll {
        let sample: f64 = rand::random();
        if sample < self.transport_odds {
            Roll::Transport
        } else if sample < self.transport_odds + self.rejection_odds {
            Roll::Domain
        } else {
            Roll::Success
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for SimulatedGateway {
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegisteredUser, GatewayError> {
        sleep(REGISTER_DELAY).await;
        match self.roll() {
            Roll::Transport => Err(GatewayError::Timeout),
            Roll::Domain => Err(GatewayError::EmailTaken),
            Roll::Success => Ok(RegisteredUser {
                id: Uuid::new_v4(),
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
            }),
        }
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginGrant, GatewayError> {
        sleep(LOGIN_DELAY).await;
        match self.roll() {
            Roll::Transport => Err(GatewayError::Timeout),
            Roll::Domain => Err(GatewayError::InvalidCredentials),
            Roll::Success => Ok(LoginGrant {
                user: AccountProfile {
                    id: Uuid::new_v4(),
                    email: request.email,
                    name: "John Doe".to_string(),
                    role: "Administrator".to_string(),
                },
                token: format!("enterprise-session-{}", Uuid::new_v4().simple()),
                issued_at: Utc::now(),
            }),
        }
    }

    async fn reset_password(&self, request: ResetRequest) -> Result<ResetReceipt, GatewayError> {
        sleep(RESET_DELAY).await;
        match self.roll() {
            Roll::Transport => Err(GatewayError::Timeout),
            Roll::Domain => Err(GatewayError::EmailNotFound),
            Roll::Success => Ok(ResetReceipt {
                email: request.email,
                message: "Reset instructions sent successfully".to_string(),
            }),
        }
    }
}
