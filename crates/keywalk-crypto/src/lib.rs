//! Keywalk Cryptographic Primitives
//!
//! DUKPT (Derived Unique Key Per Transaction, ANSI X9.24) key derivation.
//! Pure functions with deterministic outputs; callers provide key material
//! and serials, nothing here touches system resources.
//!
//! # Key Lifecycle
//!
//! A root key held by the key-origin side derives one initial key per
//! device. The device then walks the 21-bit transaction counter embedded in
//! its key serial number to produce a fresh key for every transaction.
//!
//! ```text
//! RootKey (BDK, server only)
//!        │
//!        ▼ TDES over counter-reset serial
//! InitialKey (IPEK, one per device)
//!        │
//!        ▼ 21-step register walk over the counter
//! TransactionKey (one per counter value)
//! ```
//!
//! Transaction keys are used for exactly one transaction and discarded.
//! The walk only mixes forward: a later transaction key does not reveal
//! the initial key or any earlier transaction key.
//!
//! # Security
//!
//! Non-invertibility:
//! - Each selected counter bit mixes the key through a one-way DES step
//! - Earlier register states cannot be recomputed from a later key alone
//!
//! Device isolation:
//! - The initial key depends only on the device identity bits of the serial
//! - Compromising one device's initial key exposes no other device
//!
//! Root key confinement:
//! - Only initial-key derivation ever reads the root key
//! - Devices hold their initial key and serial, never the root key
//!
//! Key hygiene:
//! - All secret types zeroize their material on drop
//! - Derivation registers are zeroized before returning

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod derivation;
mod error;
mod initial;
mod keys;
mod serial;

pub use derivation::{
    DATA_REQUEST_VARIANT_MASK, DATA_RESPONSE_VARIANT_MASK, MAC_REQUEST_VARIANT_MASK,
    MAC_RESPONSE_VARIANT_MASK, PIN_KEY_VARIANT_MASK, derive_transaction_key,
};
pub use error::DukptError;
pub use initial::derive_initial_key;
pub use keys::{InitialKey, KEY_SIZE, RootKey, TransactionKey};
pub use serial::{COUNTER_MAX, KeySerial, SERIAL_SIZE};
