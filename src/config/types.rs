//! Gateway settings resolved at startup.

use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Base URL of the remote SQL-over-HTTP endpoint; statements go to `{api_url}/query`.
    pub api_url: String,
    pub api_key: String,
    pub bind_addr: SocketAddr,
    /// Upstream request timeout. `None` leaves the transport defaults in place.
    pub request_timeout: Option<Duration>,
    pub max_body_bytes: usize,
}
