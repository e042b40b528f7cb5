#![forbid(unsafe_code)]

//! Content-addressed asset resolution with gateway failover.
//!
//! Given an immutable content identifier (CID) and a ranked list of HTTP
//! gateways, [`Resolver`] finds a currently-reachable gateway with bounded
//! latency, memoizes the health decision per `(gateway, cid)` pair, and
//! degrades to the preferred gateway when nothing passes its probe.

mod cid;
mod error;
mod health;
mod options;
mod preload;
mod resolver;

pub use crate::{
    cid::{asset_url, manifest_url, Cid, MANIFEST_FILE},
    error::{GatewayError, GatewayResult},
    health::{HealthCache, HealthRecord},
    options::GatewayOptions,
    resolver::Resolver,
};

// Re-export the net seam the resolver is generic over.
pub use stoa_net::{HttpClient, Net, NetOptions};

/// Convenience constructor: a resolver backed by the default HTTP client,
/// with the client's request timeout aligned to the probe timeout.
pub fn resolver(options: GatewayOptions) -> Resolver<HttpClient> {
    let net = HttpClient::new(NetOptions {
        request_timeout: options.probe_timeout,
        ..NetOptions::default()
    });
    Resolver::new(options, net)
}
