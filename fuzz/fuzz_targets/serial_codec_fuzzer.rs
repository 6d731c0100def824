//! Fuzz target for the serial counter codec
//!
//! Drives arbitrary operation sequences against arbitrary serial bytes.
//!
//! # Invariants
//!
//! - The counter never reads above its 21-bit range
//! - Reset is idempotent and always yields counter zero
//! - Increment either advances by exactly one or reports exhaustion at
//!   the ceiling; it never wraps and never touches identity bits
//! - No operation panics

#![no_main]

use arbitrary::Arbitrary;
use keywalk_crypto::{COUNTER_MAX, KeySerial};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct CodecScenario {
    serial: [u8; 10],
    operations: Vec<CounterOp>,
}

#[derive(Debug, Clone, Arbitrary)]
enum CounterOp {
    Reset,
    Increment,
    WithCounter(u32),
}

fuzz_target!(|scenario: CodecScenario| {
    let mut serial = KeySerial::new(scenario.serial);
    let identity = serial.reset_counter();

    for op in scenario.operations {
        assert!(serial.counter() <= COUNTER_MAX);

        match op {
            CounterOp::Reset => {
                let reset = serial.reset_counter();
                assert_eq!(reset.counter(), 0);
                assert_eq!(reset.reset_counter(), reset);
                serial = reset;
            }
            CounterOp::Increment => {
                let before = serial.counter();
                match serial.increment_counter() {
                    Ok(next) => {
                        assert_eq!(next.counter(), before + 1);
                        assert_eq!(next.reset_counter(), identity);
                        serial = next;
                    }
                    Err(_) => assert_eq!(before, COUNTER_MAX),
                }
            }
            CounterOp::WithCounter(value) => {
                if let Ok(next) = serial.with_counter(value) {
                    assert!(value <= COUNTER_MAX);
                    assert_eq!(next.counter(), value);
                    assert_eq!(next.reset_counter(), identity);
                    serial = next;
                } else {
                    assert!(value > COUNTER_MAX);
                }
            }
        }
    }
});
