#![forbid(unsafe_code)]

//! # Stoa
//!
//! Facade crate for content-addressed asset resolution with gateway failover.
//!
//! Given a CID produced by a decentralized storage upload, locate a
//! currently-reachable HTTP gateway and build ready-to-use asset URLs,
//! with bounded probe latency and per-`(gateway, cid)` health caching.
//!
//! ## Quick start
//!
//! ```ignore
//! use stoa::prelude::*;
//!
//! let options = GatewayOptions::new("https://ipfs.example.com".parse()?)
//!     .with_fallbacks(vec!["https://gateway.backup.io".parse()?]);
//! let resolver = stoa::gateway::resolver(options);
//!
//! let cid = Cid::new("bafybeig...")?;
//! let url = resolver.resolve_asset_url(&cid, "img_1.png").await?;
//!
//! // Best-effort warm-up before rendering a gallery.
//! resolver.preload(&cid, &filenames).await;
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod gateway {
    pub use stoa_gateway::*;
}

pub mod net {
    pub use stoa_net::*;
}

pub mod prelude {
    pub use stoa_gateway::{Cid, GatewayError, GatewayOptions, HealthCache, Resolver};
    pub use stoa_net::{HttpClient, Net, NetExt, NetOptions};
}
