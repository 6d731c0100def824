//! Root-key holder: provisioning and stateless re-derivation.

use keywalk_crypto::{
    InitialKey, KEY_SIZE, KeySerial, RootKey, SERIAL_SIZE, TransactionKey, derive_initial_key,
    derive_transaction_key,
};
use tracing::{debug, trace};

use crate::env::Environment;

/// Key-origin side of the scheme.
///
/// Holds the root key and nothing else. Every operation besides serial
/// generation is a pure function of the root key and the caller's serial,
/// so any transaction key can be re-derived on demand without any stored
/// history, and concurrent calls for different devices need no
/// synchronization.
pub struct Server<E: Environment> {
    env: E,
    root_key: RootKey,
}

impl<E: Environment> Server<E> {
    /// Create a server around an existing root key.
    pub fn new(env: E, root_key: RootKey) -> Self {
        Self { env, root_key }
    }

    /// Generate a fresh random root key.
    ///
    /// Separate from [`new`](Self::new) so deployments that already hold a
    /// root key never touch the random source for it.
    pub fn generate_root_key(env: &E) -> RootKey {
        let mut bytes = [0u8; KEY_SIZE];
        env.random_bytes(&mut bytes);
        RootKey::new(bytes)
    }

    /// Generate a random device serial with its counter zeroed.
    pub fn generate_serial(&self) -> KeySerial {
        let mut bytes = [0u8; SERIAL_SIZE];
        self.env.random_bytes(&mut bytes);
        let serial = KeySerial::new(bytes).reset_counter();
        debug!(?serial, "generated device serial");
        serial
    }

    /// Derive the initial key for the device identified by `serial`.
    ///
    /// This is the provisioning hand-off: the result goes to exactly one
    /// device together with the serial. The server does not store it; it
    /// is re-derived from the root key whenever needed.
    pub fn derive_initial_key(&self, serial: &KeySerial) -> InitialKey {
        debug!(?serial, "derived initial key for provisioning");
        derive_initial_key(&self.root_key, serial)
    }

    /// Re-derive the transaction key for the counter carried in `serial`.
    ///
    /// Runs the full chain - initial key from the root key, then the
    /// counter walk - so the server can decrypt any reported transaction
    /// without having witnessed the ones before it.
    pub fn derive_transaction_key(&self, serial: &KeySerial) -> TransactionKey {
        let initial_key = derive_initial_key(&self.root_key, serial);
        let key = derive_transaction_key(&initial_key, serial);
        trace!(?serial, counter = serial.counter(), "re-derived transaction key");
        key
    }
}
