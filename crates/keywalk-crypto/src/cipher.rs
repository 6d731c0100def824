//! Block cipher invocation
//!
//! The scheme fixes its primitive to DES (single) and TDES-EDE3 (for the
//! initial key), always as one electronic-codebook block. This module is
//! the only place the cipher is invoked; nothing here implements cipher
//! internals.

use des::{
    Des, TdesEde3,
    cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray},
};

/// Encrypt one 8-byte block under an 8-byte single-DES key.
pub(crate) fn encrypt_block(key: &[u8; 8], block: &[u8; 8]) -> [u8; 8] {
    let cipher = Des::new(&GenericArray::from(*key));
    let mut out = GenericArray::from(*block);
    cipher.encrypt_block(&mut out);
    out.into()
}

/// Encrypt one 8-byte block under a 24-byte triple-length key.
pub(crate) fn encrypt_block_triple(key: &[u8; 24], block: &[u8; 8]) -> [u8; 8] {
    let cipher = TdesEde3::new(&GenericArray::from(*key));
    let mut out = GenericArray::from(*block);
    cipher.encrypt_block(&mut out);
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_des_known_answer() {
        // Classic known-answer block: DES("Now is t") under 0123456789ABCDEF.
        let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let block = *b"Now is t";
        assert_eq!(
            encrypt_block(&key, &block),
            [0x3F, 0xA4, 0x0E, 0x8A, 0x98, 0x4D, 0x48, 0x15]
        );
    }

    #[test]
    fn triple_with_repeated_key_degenerates_to_single() {
        let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let mut triple = [0u8; 24];
        triple[..8].copy_from_slice(&key);
        triple[8..16].copy_from_slice(&key);
        triple[16..].copy_from_slice(&key);

        let block = [0x5A; 8];
        assert_eq!(encrypt_block_triple(&triple, &block), encrypt_block(&key, &block));
    }
}
