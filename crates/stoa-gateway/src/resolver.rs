#![forbid(unsafe_code)]

use std::{sync::Arc, time::Instant};

use stoa_net::{Net, NetExt, TimeoutNet};
use tracing::{debug, warn};
use url::Url;

use crate::{
    cid::{asset_url, manifest_url, Cid},
    error::GatewayResult,
    health::HealthCache,
    options::GatewayOptions,
};

/// Outcome of a single reachability probe.
///
/// Timeouts, transport failures, and non-success statuses all collapse into
/// `Unreachable`; the distinction is logged, not surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    Reachable,
    Unreachable,
}

/// Resolves a reachable gateway for a CID out of a ranked candidate list.
///
/// ## Normative
/// - Candidates are probed sequentially in preference order; a fresh
///   `reachable=true` cache record short-circuits without network I/O, and a
///   fresh `reachable=false` record skips the candidate without re-probing.
/// - One bounded probe attempt per gateway per resolution call, no retries.
/// - When every candidate fails, resolution degrades to the preferred
///   gateway instead of erroring: the manifest probe can fail even though
///   the actual assets are servable.
pub struct Resolver<N: Net> {
    net: TimeoutNet<N>,
    health: Arc<HealthCache>,
    options: GatewayOptions,
}

impl<N: Net> Resolver<N> {
    /// Wraps `net` in a [`TimeoutNet`] layer so every probe and warm-up
    /// request is bounded by `probe_timeout`, whatever `N` is.
    pub fn new(options: GatewayOptions, net: N) -> Self {
        let health = Arc::new(HealthCache::new(
            options.health_capacity,
            options.health_ttl,
        ));
        let net = net.with_timeout(options.probe_timeout);
        Self {
            net,
            health,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }

    #[must_use]
    pub fn health(&self) -> &HealthCache {
        &self.health
    }

    pub(crate) fn net(&self) -> &TimeoutNet<N> {
        &self.net
    }

    /// Returns the base URL of the first gateway confirmed healthy for `cid`,
    /// or the preferred gateway when no candidate passes its probe.
    ///
    /// Never errors: network failures are absorbed into the health cache and
    /// the preferred gateway is the terminal fallback.
    pub async fn resolve_gateway(&self, cid: &Cid) -> Url {
        for gateway in self.options.candidates() {
            match self.health.get(gateway, cid, Instant::now()) {
                Some(record) if record.reachable => {
                    debug!(gateway = %gateway, cid = %cid, "health cache hit");
                    return gateway.clone();
                }
                Some(_) => {
                    debug!(gateway = %gateway, cid = %cid, "cached unreachable, skipping");
                    continue;
                }
                None => {}
            }

            let outcome = self.probe(gateway, cid).await;
            self.health.set(
                gateway,
                cid,
                outcome == ProbeOutcome::Reachable,
                Instant::now(),
            );

            if outcome == ProbeOutcome::Reachable {
                debug!(gateway = %gateway, cid = %cid, "probe succeeded");
                return gateway.clone();
            }
        }

        warn!(cid = %cid, preferred = %self.options.preferred, "all gateway probes failed, falling back to preferred");
        self.options.preferred.clone()
    }

    /// Resolves a ready-to-use asset URL: winning gateway + `/ipfs/{cid}/{filename}`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GatewayError::InvalidFilename`] or
    /// [`crate::GatewayError::Url`] only when `filename` cannot form a valid
    /// contract path; gateway reachability never produces an error.
    pub async fn resolve_asset_url(&self, cid: &Cid, filename: &str) -> GatewayResult<Url> {
        let gateway = self.resolve_gateway(cid).await;
        asset_url(&gateway, cid, filename)
    }

    /// One bounded HEAD against the well-known manifest object.
    ///
    /// The [`TimeoutNet`] layer drops the in-flight request at the deadline
    /// so a hung gateway cannot stall the sweep beyond its slice.
    async fn probe(&self, gateway: &Url, cid: &Cid) -> ProbeOutcome {
        let url = match manifest_url(gateway, cid) {
            Ok(url) => url,
            Err(err) => {
                debug!(gateway = %gateway, cid = %cid, error = %err, "could not build manifest url");
                return ProbeOutcome::Unreachable;
            }
        };

        match self.net.head(url, None).await {
            Ok(_) => ProbeOutcome::Reachable,
            Err(err) if err.is_timeout() => {
                debug!(gateway = %gateway, cid = %cid, "probe timed out");
                ProbeOutcome::Unreachable
            }
            Err(err) => {
                debug!(gateway = %gateway, cid = %cid, error = %err, "probe failed");
                ProbeOutcome::Unreachable
            }
        }
    }
}
