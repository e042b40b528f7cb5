#![forbid(unsafe_code)]

use std::{num::NonZeroUsize, time::Duration};

use url::Url;

/// Configuration for gateway resolution.
///
/// Used with [`crate::Resolver::new`]. Order of `fallbacks` encodes
/// preference, not guaranteed availability.
#[derive(Clone, Debug)]
pub struct GatewayOptions {
    /// Preferred gateway base URL. Also the unconditional fallback when every
    /// probe fails.
    pub preferred: Url,
    /// Fallback gateway base URLs, tried in order after the preferred one.
    pub fallbacks: Vec<Url>,
    /// Per-probe budget. A hung gateway cannot stall the candidate sweep
    /// beyond this slice.
    pub probe_timeout: Duration,
    /// Validity window for cached health decisions.
    pub health_ttl: Duration,
    /// Max concurrent warm-up requests per preload call.
    pub preload_limit: usize,
    /// Capacity cap of the health cache; oldest entries are evicted beyond it.
    pub health_capacity: NonZeroUsize,
}

impl GatewayOptions {
    /// Create options with the given preferred gateway and defaults everywhere else.
    pub fn new(preferred: Url) -> Self {
        Self {
            preferred,
            fallbacks: Vec::new(),
            probe_timeout: Duration::from_secs(8),
            health_ttl: Duration::from_secs(300),
            preload_limit: 3,
            health_capacity: NonZeroUsize::new(1024).expect("non-zero literal"),
        }
    }

    /// Set fallback gateways (in preference order).
    pub fn with_fallbacks(mut self, fallbacks: Vec<Url>) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Set the per-probe timeout.
    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    /// Set the health-cache TTL.
    pub fn with_health_ttl(mut self, health_ttl: Duration) -> Self {
        self.health_ttl = health_ttl;
        self
    }

    /// Set the preload fan-out limit.
    pub fn with_preload_limit(mut self, preload_limit: usize) -> Self {
        self.preload_limit = preload_limit;
        self
    }

    /// Set the health-cache capacity.
    pub fn with_health_capacity(mut self, health_capacity: NonZeroUsize) -> Self {
        self.health_capacity = health_capacity;
        self
    }

    /// Candidate gateways in preference order: preferred first, then fallbacks.
    pub fn candidates(&self) -> impl Iterator<Item = &Url> {
        std::iter::once(&self.preferred).chain(self.fallbacks.iter())
    }
}
