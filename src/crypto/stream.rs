//! Stream cipher interface
//!
//! A single trait with two concrete variants selected by configuration:
//! [`crate::crypto::VigenereStream`] (default) and
//! [`crate::crypto::CaesarSubstitution`].

use std::str::FromStr;

use crate::crypto::secure_memory::SecureString;
use crate::error::{VaultError, VaultResult};

/// Key material for a stream cipher
///
/// Carries a numeric component (`shift`, historically the passphrase length)
/// and the passphrase itself. The Vigenere variant uses only the phrase; the
/// Caesar variant uses both.
#[derive(Debug)]
pub struct CipherKey {
    shift: usize,
    phrase: SecureString,
}

impl CipherKey {
    /// Build a key from a passphrase, using its length as the shift
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty passphrase: a zero-length running
    /// key cannot be cycled over the input.
    pub fn from_passphrase(phrase: &str) -> VaultResult<Self> {
        if phrase.is_empty() {
            return Err(VaultError::InvalidKey("empty passphrase".into()));
        }
        Ok(Self {
            shift: phrase.chars().count(),
            phrase: SecureString::new(phrase),
        })
    }

    /// The numeric shift component
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// The passphrase component
    pub fn phrase(&self) -> &str {
        self.phrase.as_str()
    }
}

/// A reversible character-stream transform keyed by a passphrase
pub trait StreamCipher {
    /// Encrypt plaintext with the given key
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> VaultResult<String>;

    /// Decrypt ciphertext with the given key
    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> VaultResult<String>;
}

/// Which cipher variant a store should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherKind {
    /// Running-key Vigenere over printable ASCII
    #[default]
    Vigenere,
    /// Keyed monoalphabetic substitution
    Caesar,
}

impl CipherKind {
    /// Construct the cipher this kind names
    pub fn create(self) -> Box<dyn StreamCipher> {
        match self {
            Self::Vigenere => Box::new(crate::crypto::VigenereStream::new()),
            Self::Caesar => Box::new(crate::crypto::CaesarSubstitution::new()),
        }
    }
}

impl FromStr for CipherKind {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vigenere" => Ok(Self::Vigenere),
            "caesar" => Ok(Self::Caesar),
            other => Err(VaultError::Config(format!(
                "Unknown cipher kind '{}' (expected 'vigenere' or 'caesar')",
                other
            ))),
        }
    }
}
