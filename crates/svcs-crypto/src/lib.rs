//! Content fingerprinting for SVCS.
//!
//! Provides a domain-separated streaming BLAKE3 hasher truncated to 128 bits
//! and the fingerprint function that decides whether a commit is a no-op.
//!
//! The threat model is accidental content drift, not adversarial collisions.

pub mod fingerprint;
pub mod hasher;

pub use fingerprint::{fingerprint, FingerprintError};
pub use hasher::FingerprintHasher;
