mod response;
mod server;
mod tracing;

pub use response::PageError;
pub use server::{GatewayConfig, GatewayServer, HealthResponse, PollsState};
pub use self::tracing::{tracing_middleware, TracingState, REQUEST_ID_HEADER, TRACE_ID_HEADER};
