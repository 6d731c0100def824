//! Transaction key derivation
//!
//! The non-reversible walk from an initial key to the key for one specific
//! counter value. Both sides run it: the device against its stored initial
//! key and live serial, the key-origin side against a re-derived initial
//! key and the serial reported with the transaction.
//!
//! # Security Properties
//!
//! - Determinism: the same (key, serial) pair always yields the same key
//! - Non-invertibility: every selected counter bit passes the key through
//!   a one-way DES mixing step; a later key reveals no earlier one
//! - Counter selectivity: only the set bits of the counter participate, so
//!   any two distinct counters take different paths through the walk

use zeroize::Zeroize;

use crate::{
    cipher,
    keys::{InitialKey, KEY_SIZE, TransactionKey},
    serial::KeySerial,
};

/// Variant mask applied to both key halves inside each derivation step.
const KEY_VARIANT_HALF_MASK: [u8; 8] = [0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00];

/// Variant mask for PIN-encryption keys.
///
/// The scheme defines per-use variants of a transaction key, produced by
/// XOR-ing a mask onto the derived key. No derivation here applies them;
/// they are published for callers that format PIN blocks or MACs.
///
/// ```
/// use keywalk_crypto::{InitialKey, KeySerial, PIN_KEY_VARIANT_MASK, derive_transaction_key};
///
/// let key = derive_transaction_key(
///     &InitialKey::new([0x6A; 16]),
///     &KeySerial::new([0xFF, 0xFF, 0x98, 0x76, 0x54, 0x32, 0x10, 0xE0, 0x00, 0x01]),
/// );
/// let mut pin_key = *key.as_bytes();
/// for (byte, mask) in pin_key.iter_mut().zip(PIN_KEY_VARIANT_MASK) {
///     *byte ^= mask;
/// }
/// # assert_ne!(&pin_key, key.as_bytes());
/// ```
pub const PIN_KEY_VARIANT_MASK: [u8; KEY_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF,
];

/// Variant mask for request-direction MAC keys.
pub const MAC_REQUEST_VARIANT_MASK: [u8; KEY_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00,
];

/// Variant mask for response-direction MAC keys.
pub const MAC_RESPONSE_VARIANT_MASK: [u8; KEY_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00,
];

/// Variant mask for request-direction data-encryption keys.
pub const DATA_REQUEST_VARIANT_MASK: [u8; KEY_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
];

/// Variant mask for response-direction data-encryption keys.
pub const DATA_RESPONSE_VARIANT_MASK: [u8; KEY_SIZE] = [
    0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00,
];

/// Derive the transaction key for the counter value carried in `serial`.
///
/// A 64-bit crypto register starts as the low 8 serial bytes with the
/// counter cleared. The walk probes the 21 counter bits from most to least
/// significant; each set bit is merged into the register and the key is
/// passed through one one-way mixing step. After the walk the register
/// holds the full counter and the key register holds the transaction key.
///
/// A serial whose counter is zero selects no steps, so the result equals
/// the base key; real transactions always carry a counter of at least 1.
pub fn derive_transaction_key(initial_key: &InitialKey, serial: &KeySerial) -> TransactionKey {
    let mut register = [0u8; 8];
    register.copy_from_slice(&serial.as_bytes()[2..]);
    register[5] &= 0xE0;
    register[6] = 0;
    register[7] = 0;

    let target = serial.counter();
    let mut key = *initial_key.as_bytes();

    let mut probe: u32 = 1 << 20;
    while probe != 0 {
        if probe & target != 0 {
            register[5] |= (probe >> 16) as u8;
            register[6] |= (probe >> 8) as u8;
            register[7] |= probe as u8;
            key = one_way_step(&key, &register);
        }
        probe >>= 1;
    }

    let derived = TransactionKey::new(key);
    key.zeroize();
    derived
}

/// One mixing step of the walk.
///
/// The plain branch becomes the new right half; the branch under the
/// variant of the key becomes the new left half. Each branch XORs the
/// crypto register with the right key half, encrypts under the left key
/// half, and XORs the right key half back in.
fn one_way_step(key: &[u8; KEY_SIZE], register: &[u8; 8]) -> [u8; KEY_SIZE] {
    let mut left = [0u8; 8];
    let mut right = [0u8; 8];
    left.copy_from_slice(&key[..8]);
    right.copy_from_slice(&key[8..]);

    let mut plain = xor_blocks(register, &right);
    plain = cipher::encrypt_block(&left, &plain);
    let new_right = xor_blocks(&plain, &right);

    let mut variant_left = xor_blocks(&left, &KEY_VARIANT_HALF_MASK);
    let mut variant_right = xor_blocks(&right, &KEY_VARIANT_HALF_MASK);
    let mut masked = xor_blocks(register, &variant_right);
    masked = cipher::encrypt_block(&variant_left, &masked);
    let new_left = xor_blocks(&masked, &variant_right);

    let mut next = [0u8; KEY_SIZE];
    next[..8].copy_from_slice(&new_left);
    next[8..].copy_from_slice(&new_right);

    left.zeroize();
    right.zeroize();
    variant_left.zeroize();
    variant_right.zeroize();

    next
}

fn xor_blocks(a: &[u8; 8], b: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a[i] ^ b[i];
    }
    out
}
