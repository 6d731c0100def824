//! Initial key derivation
//!
//! Run once per device by the key-origin side: the root key plus the
//! device identity bits of the serial select the device's initial key. The
//! counter content of the serial never participates.

use zeroize::Zeroize;

use crate::{
    cipher,
    keys::{InitialKey, KEY_SIZE, RootKey},
    serial::KeySerial,
};

/// Variant mask repeated across the triple-length derivation key for the
/// right half of the initial key.
const TRIPLE_KEY_VARIANT_MASK: [u8; 24] = [
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, //
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, //
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
];

/// Derive the initial key for the device identified by `serial`.
///
/// The root key is expanded to triple length (root key followed by its own
/// first 8 bytes). The left key half encrypts the first 8 bytes of the
/// counter-reset serial under that key; the right half encrypts the same
/// block under the variant of the key. Two serials with the same identity
/// bits yield the same initial key regardless of their counters.
pub fn derive_initial_key(root: &RootKey, serial: &KeySerial) -> InitialKey {
    let mut derivation_key = [0u8; 24];
    derivation_key[..KEY_SIZE].copy_from_slice(root.as_bytes());
    derivation_key[KEY_SIZE..].copy_from_slice(&root.as_bytes()[..8]);

    let base = serial.reset_counter();
    let mut block = [0u8; 8];
    block.copy_from_slice(&base.as_bytes()[..8]);

    let left = cipher::encrypt_block_triple(&derivation_key, &block);

    let mut variant_key = derivation_key;
    for (byte, mask) in variant_key.iter_mut().zip(TRIPLE_KEY_VARIANT_MASK) {
        *byte ^= mask;
    }
    let right = cipher::encrypt_block_triple(&variant_key, &block);

    derivation_key.zeroize();
    variant_key.zeroize();

    let mut bytes = [0u8; KEY_SIZE];
    bytes[..8].copy_from_slice(&left);
    bytes[8..].copy_from_slice(&right);
    InitialKey::new(bytes)
}
