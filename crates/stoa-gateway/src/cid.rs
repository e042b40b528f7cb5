#![forbid(unsafe_code)]

use std::fmt;

use url::Url;

use crate::error::{GatewayError, GatewayResult};

/// Well-known manifest object probed for gateway reachability.
///
/// Uploads place a manifest next to the content files, so a HEAD against it
/// is a cheap existence check that never transfers asset bytes.
pub const MANIFEST_FILE: &str = "metadata.json";

/// Content identifier for immutable content.
///
/// A `Cid` is a hash-derived address, stable regardless of which gateway
/// serves the content. This crate never constructs CIDs from content; it
/// only validates and carries values produced by the upload pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cid(String);

impl Cid {
    /// Validate and wrap a CID string.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidCid`] if the value is empty or contains
    /// path separators or whitespace, which would break the
    /// `/ipfs/{cid}/{filename}` path contract.
    pub fn new<S: Into<String>>(value: S) -> GatewayResult<Self> {
        let value = value.into();
        if value.is_empty() || value.contains('/') || value.chars().any(char::is_whitespace) {
            return Err(GatewayError::InvalidCid(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the asset URL for a gateway.
///
/// The path shape `{gateway}/ipfs/{cid}/{filename}` is a hard contract with
/// the storage backend and must not change independently. Filenames are
/// validated like CIDs before interpolation: a `/` would let the path escape
/// the `/ipfs/{cid}/` directory, and `#`/`?` would truncate it into a
/// fragment or query.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidFilename`] if the filename is empty or
/// contains `/`, `#`, `?`, or whitespace, and [`GatewayError::Url`] when the
/// result still cannot form a valid URL.
pub fn asset_url(gateway: &Url, cid: &Cid, filename: &str) -> GatewayResult<Url> {
    if filename.is_empty()
        || filename.contains(['/', '#', '?'])
        || filename.chars().any(char::is_whitespace)
    {
        return Err(GatewayError::InvalidFilename(filename.to_string()));
    }

    let base = gateway.as_str().trim_end_matches('/');
    let url = Url::parse(&format!("{base}/ipfs/{cid}/{filename}"))?;
    Ok(url)
}

/// Builds the manifest probe URL for a gateway: `{gateway}/ipfs/{cid}/metadata.json`.
pub fn manifest_url(gateway: &Url, cid: &Cid) -> GatewayResult<Url> {
    asset_url(gateway, cid, MANIFEST_FILE)
}
