#![forbid(unsafe_code)]

use futures::future::join_all;
use stoa_net::Net;
use tracing::debug;
use url::Url;

use crate::{
    cid::{asset_url, Cid},
    resolver::Resolver,
};

impl<N: Net> Resolver<N> {
    /// Warms up the winning gateway before bulk asset display.
    ///
    /// Resolves the gateway once, then issues up to `preload_limit`
    /// concurrent header-only requests for the first filenames. Purely an
    /// optimization to warm DNS/TLS/connection state and upstream caches;
    /// all failures are absorbed and logged. Each request is bounded by the
    /// resolver's timeout layer, so a preload never blocks beyond one
    /// resolution plus one concurrent round of requests.
    pub async fn preload(&self, cid: &Cid, filenames: &[String]) {
        let limit = self.options().preload_limit;
        if limit == 0 || filenames.is_empty() {
            return;
        }

        let gateway = self.resolve_gateway(cid).await;

        let requests = filenames
            .iter()
            .take(limit)
            .filter_map(|name| asset_url(&gateway, cid, name).ok())
            .map(|url| self.warm(url));

        join_all(requests).await;
    }

    async fn warm(&self, url: Url) {
        match self.net().head(url.clone(), None).await {
            Ok(_) => debug!(url = %url, "preload warmed"),
            Err(err) if err.is_timeout() => debug!(url = %url, "preload request timed out"),
            Err(err) => debug!(url = %url, error = %err, "preload request failed"),
        }
    }
}
