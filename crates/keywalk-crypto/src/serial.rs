//! Key serial number and its embedded transaction counter
//!
//! The 80-bit serial (the standard's Key Serial Number) combines a 59-bit
//! device identity with a 21-bit transaction counter in its last 21 bits
//! (bit 0 being the most significant bit of byte 0, the counter occupies
//! bits 59-79). The top 3 bits of the final 3-byte field are reserved and
//! are not part of the counter.

use core::fmt;

use crate::error::DukptError;

/// Size of a key serial number in bytes.
pub const SERIAL_SIZE: usize = 10;

/// Largest representable transaction counter (21 bits).
pub const COUNTER_MAX: u32 = 0x1F_FFFF;

/// Mask selecting the counter bits of the final 3-byte field.
const COUNTER_MASK: u32 = 0x1F_FFFF;

/// Mask selecting the reserved bits of the counter field's first byte.
const RESERVED_MASK: u8 = 0xE0;

/// An 80-bit key serial number.
///
/// Serials are not secret (they accompany every transaction in the clear),
/// so the type is `Copy` and prints its bytes. All counter operations
/// return a new serial; the input is never mutated, so a failed operation
/// leaves the caller's serial exactly as it was.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySerial {
    bytes: [u8; SERIAL_SIZE],
}

impl KeySerial {
    /// Create a serial from exactly [`SERIAL_SIZE`] bytes.
    pub fn new(bytes: [u8; SERIAL_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create a serial from a byte slice, validating the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DukptError> {
        let bytes: [u8; SERIAL_SIZE] = bytes.try_into().map_err(|_| {
            DukptError::InvalidSerialLength { expected: SERIAL_SIZE, actual: bytes.len() }
        })?;
        Ok(Self { bytes })
    }

    /// Raw serial bytes, big-endian bit order.
    pub fn as_bytes(&self) -> &[u8; SERIAL_SIZE] {
        &self.bytes
    }

    /// The 21-bit transaction counter embedded in the serial.
    pub fn counter(&self) -> u32 {
        let field = (u32::from(self.bytes[7]) << 16)
            | (u32::from(self.bytes[8]) << 8)
            | u32::from(self.bytes[9]);
        field & COUNTER_MASK
    }

    /// The serial with its counter bits zeroed.
    ///
    /// The reserved bits of the counter field and all identity bits are
    /// untouched. Idempotent: resetting a reset serial is a no-op.
    pub fn reset_counter(&self) -> KeySerial {
        let mut bytes = self.bytes;
        bytes[7] &= RESERVED_MASK;
        bytes[8] = 0;
        bytes[9] = 0;
        Self { bytes }
    }

    /// The serial with its counter advanced by one.
    ///
    /// Fails with [`DukptError::CounterExhausted`] once the counter has
    /// reached [`COUNTER_MAX`]; counters never wrap.
    pub fn increment_counter(&self) -> Result<KeySerial, DukptError> {
        let counter = self.counter();
        if counter >= COUNTER_MAX {
            return Err(DukptError::CounterExhausted { counter });
        }

        let next = counter + 1;
        let mut bytes = self.bytes;
        bytes[7] = (bytes[7] & RESERVED_MASK) | ((next >> 16) as u8);
        bytes[8] = (next >> 8) as u8;
        bytes[9] = next as u8;
        Ok(Self { bytes })
    }

    /// The serial with its counter replaced by `counter`.
    ///
    /// Used by the key-origin side to re-derive the key for a reported
    /// transaction. Values above [`COUNTER_MAX`] are rejected.
    pub fn with_counter(&self, counter: u32) -> Result<KeySerial, DukptError> {
        if counter > COUNTER_MAX {
            return Err(DukptError::CounterExhausted { counter });
        }

        let mut bytes = self.bytes;
        bytes[7] = (bytes[7] & RESERVED_MASK) | ((counter >> 16) as u8);
        bytes[8] = (counter >> 8) as u8;
        bytes[9] = counter as u8;
        Ok(Self { bytes })
    }
}

impl fmt::Debug for KeySerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySerial(")?;
        for byte in &self.bytes {
            write!(f, "{byte:02X}")?;
        }
        f.write_str(")")
    }
}
