//! HTTP runtime for the polls application: the axum gateway and the page
//! handlers it routes to.

pub mod gateway;
pub mod views;

pub use gateway::{GatewayConfig, GatewayServer, PageError, PollsState};
