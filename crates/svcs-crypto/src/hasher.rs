use std::io::{self, Read};

use svcs_types::{Fingerprint, FINGERPRINT_LEN};

/// Domain-separated streaming BLAKE3 hasher producing 128-bit fingerprints.
///
/// The domain tag is fed before any content, so a fingerprint can never
/// collide with a plain BLAKE3 hash of the same bytes. The digest is read
/// from BLAKE3's extendable output, truncated to [`FINGERPRINT_LEN`] bytes.
pub struct FingerprintHasher {
    inner: blake3::Hasher,
}

impl FingerprintHasher {
    /// Domain tag for tracked-content fingerprints.
    pub const DOMAIN: &'static str = "svcs-fingerprint-v1";

    /// Create a hasher with the default domain tag.
    pub fn new() -> Self {
        Self::with_domain(Self::DOMAIN)
    }

    /// Create a hasher with a custom domain tag.
    pub fn with_domain(domain: &str) -> Self {
        let mut inner = blake3::Hasher::new();
        inner.update(domain.as_bytes());
        inner.update(b":");
        Self { inner }
    }

    /// Feed raw bytes.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Feed everything a reader yields. Returns the number of bytes consumed.
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> io::Result<u64> {
        io::copy(&mut reader, &mut self.inner)
    }

    /// Finish and return the 128-bit fingerprint.
    pub fn finalize(&self) -> Fingerprint {
        let mut digest = [0u8; FINGERPRINT_LEN];
        self.inner.finalize_xof().fill(&mut digest);
        Fingerprint::from_digest(digest)
    }

    /// One-shot fingerprint of a byte slice.
    pub fn digest(data: &[u8]) -> Fingerprint {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for FingerprintHasher {
    fn default() -> Self {
        Self::new()
    }
}
