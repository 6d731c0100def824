//! Fuzz target for transaction key derivation
//!
//! # Invariants
//!
//! - Derivation is deterministic (same inputs, same key)
//! - A zero counter selects no steps and returns the base key
//! - A provisioned client agrees with direct derivation for every key
//!   it issues
//! - Derivation never panics for any key/serial byte pattern

#![no_main]

use arbitrary::Arbitrary;
use keywalk_client::Client;
use keywalk_crypto::{InitialKey, KeySerial, derive_transaction_key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct DerivationScenario {
    key: [u8; 16],
    serial: [u8; 10],
    transactions: u8,
}

fuzz_target!(|scenario: DerivationScenario| {
    let initial_key = InitialKey::new(scenario.key);
    let serial = KeySerial::new(scenario.serial);

    let first = derive_transaction_key(&initial_key, &serial);
    let second = derive_transaction_key(&initial_key, &serial);
    assert_eq!(first.as_bytes(), second.as_bytes());

    let at_zero = derive_transaction_key(&initial_key, &serial.reset_counter());
    assert_eq!(at_zero.as_bytes(), initial_key.as_bytes());

    if let Ok(mut client) = Client::new(initial_key.clone(), serial.reset_counter()) {
        for _ in 0..scenario.transactions.min(8) {
            let issued = client.next_key().expect("counter far from ceiling");
            let direct = derive_transaction_key(&initial_key, &issued.serial());
            assert_eq!(issued.key().as_bytes(), direct.as_bytes());
        }
    }
});
