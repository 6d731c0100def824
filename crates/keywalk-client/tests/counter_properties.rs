//! Property-based tests for the client's counter discipline
//!
//! 1. **Monotonicity**: issued counter values strictly increase by one
//! 2. **Agreement**: every issued key equals a direct derivation for the
//!    serial it was issued with
//! 3. **Exhaustion**: near the counter ceiling the client refuses instead
//!    of reusing or wrapping

use keywalk_client::{Client, InitialKey, KeySerial};
use keywalk_crypto::{COUNTER_MAX, derive_transaction_key};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_issued_counters_increase_by_one(
        key_bytes in any::<[u8; 16]>(),
        serial_bytes in any::<[u8; 10]>(),
        transactions in 1usize..30,
    ) {
        let provisioned = KeySerial::new(serial_bytes).reset_counter();
        let mut client = Client::new(InitialKey::new(key_bytes), provisioned).unwrap();

        let mut previous = 0u32;
        for _ in 0..transactions {
            let issued = client.next_key().unwrap();
            prop_assert_eq!(issued.serial().counter(), previous + 1);
            previous = issued.serial().counter();
        }
    }

    #[test]
    fn prop_issued_keys_agree_with_direct_derivation(
        key_bytes in any::<[u8; 16]>(),
        serial_bytes in any::<[u8; 10]>(),
    ) {
        let initial_key = InitialKey::new(key_bytes);
        let provisioned = KeySerial::new(serial_bytes).reset_counter();
        let mut client = Client::new(initial_key.clone(), provisioned).unwrap();

        for _ in 0..5 {
            let issued = client.next_key().unwrap();
            let direct = derive_transaction_key(&initial_key, &issued.serial());
            prop_assert_eq!(issued.key().as_bytes(), direct.as_bytes());
        }
    }

    #[test]
    fn prop_client_stops_at_the_ceiling(
        key_bytes in any::<[u8; 16]>(),
        serial_bytes in any::<[u8; 10]>(),
        headroom in 1u32..4,
    ) {
        let near_ceiling = KeySerial::new(serial_bytes)
            .with_counter(COUNTER_MAX - headroom)
            .unwrap();
        let mut client = Client::new(InitialKey::new(key_bytes), near_ceiling).unwrap();

        // Issue until the counter would pass the ceiling, one key per value.
        for offset in 1..headroom {
            let issued = client.next_key().unwrap();
            prop_assert_eq!(issued.serial().counter(), COUNTER_MAX - headroom + offset);
        }

        prop_assert!(client.next_key().is_err());
        prop_assert!(client.next_key().is_err());
    }
}
