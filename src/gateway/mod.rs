//! Gateway module for the simulated auth backend

mod client;
mod traits;

pub use client::SimulatedGateway;
pub use traits::{AuthGateway, GatewayError};

#[cfg(test)]
pub use traits::MockAuthGateway;
