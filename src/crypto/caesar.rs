//! Keyed monoalphabetic substitution cipher
//!
//! The working alphabet is the passphrase followed by the base printable
//! alphabet, with duplicates removed in first-seen order. Each character is
//! replaced by the one `shift` positions later in that alphabet (earlier for
//! decryption), wrapping modulo the alphabet length.

use crate::crypto::stream::{CipherKey, StreamCipher};
use crate::error::{VaultError, VaultResult};

/// Base alphabet before keying: letters, digits, common punctuation, space
const BASE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:'\",.<>?/\\ ";

/// The alternate cipher variant
#[derive(Debug, Clone, Copy, Default)]
pub struct CaesarSubstitution;

impl CaesarSubstitution {
    /// Create a new substitution cipher
    pub fn new() -> Self {
        Self
    }

    /// Build the keyed alphabet: passphrase first, then the base alphabet,
    /// keeping only the first occurrence of each character
    fn keyed_alphabet(key: &CipherKey) -> Vec<char> {
        let mut alphabet = Vec::with_capacity(BASE_ALPHABET.len());
        for c in key.phrase().chars().chain(BASE_ALPHABET.chars()) {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }
        alphabet
    }

    fn transform(&self, input: &str, key: &CipherKey, sign: i64) -> VaultResult<String> {
        let alphabet = Self::keyed_alphabet(key);
        let len = alphabet.len() as i64;

        input
            .chars()
            .map(|c| {
                let pos = alphabet
                    .iter()
                    .position(|&a| a == c)
                    .ok_or_else(|| {
                        VaultError::Cipher(format!(
                            "character {:?} is outside the substitution alphabet",
                            c
                        ))
                    })? as i64;
                let mapped = (pos + sign * key.shift() as i64).rem_euclid(len);
                Ok(alphabet[mapped as usize])
            })
            .collect()
    }
}

impl StreamCipher for CaesarSubstitution {
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> VaultResult<String> {
        self.transform(plaintext, key, 1)
    }

    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> VaultResult<String> {
        self.transform(ciphertext, key, -1)
    }
}
