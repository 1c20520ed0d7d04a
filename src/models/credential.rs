//! Login credential
//!
//! Held transiently by the caller for the duration of a store operation.
//! The password doubles as the cipher key and is never persisted.

use crate::crypto::{CipherKey, SecureString};
use crate::error::VaultResult;

/// A user name plus an optional password
///
/// An empty password string is treated the same as no password at all:
/// the record is stored as plaintext.
#[derive(Debug)]
pub struct Credential {
    name: String,
    password: Option<SecureString>,
}

impl Credential {
    /// Create a credential, normalizing an empty password to `None`
    pub fn new(name: impl Into<String>, password: Option<String>) -> Self {
        let password = password.filter(|p| !p.is_empty()).map(SecureString::new);
        Self {
            name: name.into(),
            password,
        }
    }

    /// Create a credential with no password
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// The user name this credential addresses
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The password, if one was supplied
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.as_str())
    }

    /// Whether this credential carries a password
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Build the cipher key from the password, if one is present
    pub fn cipher_key(&self) -> VaultResult<Option<CipherKey>> {
        match self.password() {
            Some(password) => CipherKey::from_passphrase(password).map(Some),
            None => Ok(None),
        }
    }
}
