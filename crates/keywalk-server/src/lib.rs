//! Keywalk key-origin server.
//!
//! Owns the root key, provisions devices, and re-derives any device's
//! transaction key on demand. The server keeps no per-device or
//! per-transaction state: given a serial it re-derives the device's
//! initial key from the root key and walks the counter, so no key history
//! is ever stored.
//!
//! # Components
//!
//! - [`Server`]: root-key holder with provisioning and re-derivation
//! - [`Environment`]: randomness seam for deterministic testing
//! - [`SystemEnv`]: production environment (OS cryptographic RNG)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;
mod server;
mod system_env;

pub use env::Environment;
pub use keywalk_crypto::{DukptError, InitialKey, KeySerial, RootKey, TransactionKey};
pub use server::Server;
pub use system_env::SystemEnv;
