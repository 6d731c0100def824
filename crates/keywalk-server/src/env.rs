//! Environment abstraction for deterministic testing.
//!
//! Decouples the server from its only system resource, the random source.
//! Production uses OS entropy ([`crate::SystemEnv`]); tests implement the
//! trait with fixed or seeded bytes so provisioning is reproducible.

/// Abstract environment providing random bytes.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - `random_bytes()` uses cryptographically secure entropy in production
/// - The method is infallible except in exceptional circumstances (e.g.,
///   OS entropy exhaustion, incorrect simulation setup)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Given the same seed, a test environment produces the same sequence
    /// - Production environments use cryptographically secure RNG
    fn random_bytes(&self, buffer: &mut [u8]);
}
