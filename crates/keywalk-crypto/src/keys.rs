//! Key material types
//!
//! Newtypes over fixed-width byte arrays so the three key roles cannot be
//! confused at call sites. All of them zeroize their material on drop and
//! keep it out of `Debug` output.

use core::fmt;

use zeroize::Zeroize;

use crate::error::DukptError;

/// Size of every key in the scheme, in bytes.
pub const KEY_SIZE: usize = 16;

/// Root key (the standard's Base Derivation Key).
///
/// Held exclusively by the key-origin side. Every per-device initial key is
/// derived from it; it is never given to a device and has no public
/// accessor for its material.
#[derive(Clone)]
pub struct RootKey {
    bytes: [u8; KEY_SIZE],
}

impl RootKey {
    /// Create a root key from exactly [`KEY_SIZE`] bytes.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create a root key from a byte slice, validating the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DukptError> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| DukptError::InvalidKeyLength { expected: KEY_SIZE, actual: bytes.len() })?;
        Ok(Self { bytes })
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for RootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RootKey(..)")
    }
}

impl Drop for RootKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Initial key (the standard's Initial PIN Encryption Key).
///
/// Derived once per device identity and handed to exactly one device at
/// provisioning time. Immutable thereafter; every transaction key the
/// device produces is derived from it.
#[derive(Clone)]
pub struct InitialKey {
    bytes: [u8; KEY_SIZE],
}

impl InitialKey {
    /// Create an initial key from exactly [`KEY_SIZE`] bytes.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create an initial key from a byte slice, validating the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DukptError> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| DukptError::InvalidKeyLength { expected: KEY_SIZE, actual: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Raw key material, big-endian byte order.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for InitialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InitialKey(..)")
    }
}

impl Drop for InitialKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Transaction key derived for one specific counter value.
///
/// Used for a single transaction and then discarded. Callers must not
/// retain it past the transaction it was derived for.
#[derive(Clone)]
pub struct TransactionKey {
    bytes: [u8; KEY_SIZE],
}

impl TransactionKey {
    pub(crate) fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Raw key material, big-endian byte order.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for TransactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransactionKey(..)")
    }
}

impl Drop for TransactionKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
