//! Running-key Vigenere cipher over printable ASCII
//!
//! The passphrase is repeated cyclically to the length of the input (the
//! running key). Each position combines the plaintext code and running-key
//! code with addition modulo 95, after shifting both down by 32 (the
//! printable-ASCII floor); decryption subtracts instead.
//!
//! # Known limitation
//!
//! Round-tripping is only correct for input in the printable ASCII range
//! `[32, 126]`. Characters outside that range produce incorrect results;
//! they are deliberately not special-cased.

use crate::crypto::stream::{CipherKey, StreamCipher};
use crate::error::VaultResult;

/// Floor of the printable ASCII range
const PRINTABLE_FLOOR: i32 = 32;

/// Number of printable ASCII characters, `[32, 126]` inclusive
const PRINTABLE_SPAN: i32 = 95;

/// The default cipher variant
#[derive(Debug, Clone, Copy, Default)]
pub struct VigenereStream;

impl VigenereStream {
    /// Create a new Vigenere cipher
    pub fn new() -> Self {
        Self
    }

    fn transform(&self, input: &str, key: &CipherKey, sign: i32) -> String {
        input
            .chars()
            .zip(key.phrase().chars().cycle())
            .map(|(c, k)| {
                let code = c as i32 - PRINTABLE_FLOOR;
                let key_code = k as i32 - PRINTABLE_FLOOR;
                let combined = (code + sign * key_code).rem_euclid(PRINTABLE_SPAN);
                // Always in [32, 126], so the conversion cannot fail
                char::from_u32((combined + PRINTABLE_FLOOR) as u32).unwrap_or(' ')
            })
            .collect()
    }
}

impl StreamCipher for VigenereStream {
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> VaultResult<String> {
        Ok(self.transform(plaintext, key, 1))
    }

    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> VaultResult<String> {
        Ok(self.transform(ciphertext, key, -1))
    }
}
