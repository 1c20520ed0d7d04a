//! Cryptographic functions for TaskVault
//!
//! Provides the reversible character-stream ciphers used for at-rest
//! obfuscation of record files. These are classical toy ciphers keyed by the
//! user's password; they are an obfuscation layer, not a security boundary.

pub mod caesar;
pub mod secure_memory;
pub mod stream;
pub mod vigenere;

pub use caesar::CaesarSubstitution;
pub use secure_memory::SecureString;
pub use stream::{CipherKey, CipherKind, StreamCipher};
pub use vigenere::VigenereStream;
