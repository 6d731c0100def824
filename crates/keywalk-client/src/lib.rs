//! Keywalk Client
//!
//! Device-side half of the scheme. A client is provisioned once with an
//! initial key and a key serial number, then issues one fresh transaction
//! key per transaction, advancing its counter each time. The root key is
//! never transmitted to, or known by, a client.
//!
//! # Components
//!
//! - [`Client`]: owns one initial key and one monotonically advancing serial
//! - [`IssuedKey`]: the (serial, key) pair attached to a single transaction
//!
//! # Concurrency
//!
//! Issuing a key reads the counter, derives, and advances as one step
//! behind `&mut self`, so a shared client must be externally serialized;
//! two concurrent issuers could otherwise agree on the same counter value.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;

pub use client::{Client, IssuedKey};
pub use keywalk_crypto::{DukptError, InitialKey, KeySerial, TransactionKey};
