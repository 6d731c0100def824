//! Forward-only transaction key sequence.

use keywalk_crypto::{DukptError, InitialKey, KeySerial, TransactionKey, derive_transaction_key};

/// A transaction key together with the serial it was derived for.
///
/// The serial travels with the transaction in the clear so the key-origin
/// side can re-derive the same key; the key itself is single-use.
pub struct IssuedKey {
    serial: KeySerial,
    key: TransactionKey,
}

impl IssuedKey {
    /// Serial carrying the exact counter value this key belongs to.
    pub fn serial(&self) -> KeySerial {
        self.serial
    }

    /// The transaction key. Use once, then drop.
    pub fn key(&self) -> &TransactionKey {
        &self.key
    }
}

/// Device-side key state: one initial key, one advancing serial.
///
/// Construction consumes the provisioning hand-off (initial key + serial
/// with counter zero) and bumps the counter to 1, the first transaction
/// the key-origin side expects. Every [`next_key`](Self::next_key) call
/// consumes exactly one counter value; values are never reused or skipped.
pub struct Client {
    initial_key: InitialKey,
    serial: KeySerial,
}

impl Client {
    /// Create a client from provisioned material.
    ///
    /// The provisioned serial arrives with its counter at zero; the
    /// counter is advanced once here so the first issued key is the one
    /// for counter 1.
    pub fn new(initial_key: InitialKey, serial: KeySerial) -> Result<Self, DukptError> {
        let serial = serial.increment_counter()?;
        Ok(Self { initial_key, serial })
    }

    /// Serial the next issued key will be derived for.
    pub fn serial(&self) -> KeySerial {
        self.serial
    }

    /// Current counter value.
    pub fn counter(&self) -> u32 {
        self.serial.counter()
    }

    /// Issue the key for the current counter value and advance.
    ///
    /// The successor serial is computed first: once the counter cannot
    /// advance past this transaction the call fails with
    /// [`DukptError::CounterExhausted`] before any key is derived, so a
    /// counter value can never be issued twice.
    pub fn next_key(&mut self) -> Result<IssuedKey, DukptError> {
        let successor = self.serial.increment_counter()?;

        let serial = self.serial;
        let key = derive_transaction_key(&self.initial_key, &serial);
        self.serial = successor;

        Ok(IssuedKey { serial, key })
    }
}
