//! Per-user record store
//!
//! Reads and writes one record file per user, applying the stream cipher
//! when the credential carries a password. Construct a single store and
//! pass it by reference to the services; there is no global instance.

use crate::config::VaultPaths;
use crate::crypto::{CipherKind, StreamCipher};
use crate::error::{VaultError, VaultResult};
use crate::models::{Credential, UserRecord};

use super::file_io::{read_text, write_text_atomic};
use super::serialize::{deserialize_record, serialize_record};

/// File-backed store for user records
pub struct UserStore {
    paths: VaultPaths,
    cipher: Box<dyn StreamCipher>,
}

impl UserStore {
    /// Create a store with the default cipher (Vigenere)
    pub fn new(paths: VaultPaths) -> Self {
        Self::with_cipher(paths, CipherKind::default())
    }

    /// Create a store with an explicit cipher variant
    pub fn with_cipher(paths: VaultPaths, kind: CipherKind) -> Self {
        Self {
            paths,
            cipher: kind.create(),
        }
    }

    /// The paths this store reads and writes under
    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    /// Load the record for a credential
    ///
    /// Returns:
    /// - `Ok(Some(record))` on success. A missing file is NOT an error:
    ///   first-time users get a fresh empty record.
    /// - `Ok(None)` when the stored content cannot be turned into a usable
    ///   record (wrong password, corrupted file, or a record naming a
    ///   different user). The caller may retry authentication.
    ///
    /// # Errors
    ///
    /// `InvalidKey` and underlying read failures propagate.
    pub fn load(&self, credential: &Credential) -> VaultResult<Option<UserRecord>> {
        let path = self.paths.user_file(credential.name());

        if !path.exists() {
            return Ok(Some(UserRecord::new(credential.name())));
        }

        let raw = read_text(&path)?;

        let text = match credential.cipher_key()? {
            Some(key) => match self.cipher.decrypt(&raw, &key) {
                Ok(text) => text,
                // Garbled input under this key; treat as "no record"
                Err(VaultError::Cipher(_)) => return Ok(None),
                Err(e) => return Err(e),
            },
            None => raw,
        };

        match deserialize_record(&text) {
            Ok(record) if record.user_name == credential.name() => Ok(Some(record)),
            // Parsed but names someone else, or failed to parse at all
            Ok(_) => Ok(None),
            Err(VaultError::Deserialize(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist a record, encrypting when the credential has a password
    ///
    /// The file name tracks the record's CURRENT `user_name` field, which may
    /// differ from the credential's name after a rename; the old file is not
    /// removed.
    pub fn save(&self, credential: &Credential, record: &UserRecord) -> VaultResult<()> {
        let text = serialize_record(record)?;

        let output = match credential.cipher_key()? {
            Some(key) => self.cipher.encrypt(&text, &key)?,
            None => text,
        };

        write_text_atomic(self.paths.user_file(&record.user_name), &output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Objective;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, UserStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, UserStore::new(paths))
    }

    #[test]
    fn test_first_time_load_returns_fresh_record() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::plain("newuser");

        let record = store.load(&cred).unwrap().unwrap();
        assert_eq!(record.user_name, "newuser");
        assert!(record.objectives.is_empty());
    }

    #[test]
    fn test_save_and_load_plaintext() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::plain("alice");

        let mut record = store.load(&cred).unwrap().unwrap();
        record.objectives.push(Objective::new("Gym"));
        store.save(&cred, &record).unwrap();

        let loaded = store.load(&cred).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_and_load_encrypted() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::new("alice", Some("hunter2".into()));

        let mut record = store.load(&cred).unwrap().unwrap();
        record.objectives.push(Objective::new("Gym"));
        store.save(&cred, &record).unwrap();

        // The file on disk must not contain the plaintext
        let raw = read_text(store.paths().user_file("alice")).unwrap();
        assert!(!raw.contains("Gym"));
        assert!(!raw.contains("alice"));

        let loaded = store.load(&cred).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_wrong_password_yields_no_record() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::new("alice", Some("abc".into()));

        let mut record = store.load(&cred).unwrap().unwrap();
        record.objectives.push(Objective::new("Gym"));
        store.save(&cred, &record).unwrap();

        let wrong = Credential::new("alice", Some("xyz".into()));
        assert!(store.load(&wrong).unwrap().is_none());
    }

    #[test]
    fn test_password_against_plaintext_file_yields_no_record() {
        let (_temp_dir, store) = create_test_store();
        let plain = Credential::plain("alice");

        let record = store.load(&plain).unwrap().unwrap();
        store.save(&plain, &record).unwrap();

        let with_password = Credential::new("alice", Some("hunter2".into()));
        assert!(store.load(&with_password).unwrap().is_none());
    }

    #[test]
    fn test_corrupted_file_yields_no_record() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::plain("alice");

        write_text_atomic(store.paths().user_file("alice"), "not a record").unwrap();

        assert!(store.load(&cred).unwrap().is_none());
    }

    #[test]
    fn test_record_naming_other_user_yields_no_record() {
        let (_temp_dir, store) = create_test_store();

        // A valid record, but stored under the wrong file name
        let text = serialize_record(&UserRecord::new("mallory")).unwrap();
        write_text_atomic(store.paths().user_file("alice"), &text).unwrap();

        assert!(store.load(&Credential::plain("alice")).unwrap().is_none());
    }

    #[test]
    fn test_load_save_load_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::new("alice", Some("hunter2".into()));

        let mut record = store.load(&cred).unwrap().unwrap();
        record.objectives.push(Objective::new("Gym"));
        store.save(&cred, &record).unwrap();

        let first = store.load(&cred).unwrap().unwrap();
        store.save(&cred, &first).unwrap();
        let second = store.load(&cred).unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_uses_record_name_not_credential_name() {
        let (_temp_dir, store) = create_test_store();
        let cred = Credential::plain("alice");

        let mut record = store.load(&cred).unwrap().unwrap();
        record.user_name = "alicia".to_string();
        store.save(&cred, &record).unwrap();

        // Written under the record's current name; nothing under the old one
        assert!(store.paths().user_file("alicia").exists());
        assert!(!store.paths().user_file("alice").exists());
    }

    #[test]
    fn test_caesar_variant_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = UserStore::with_cipher(paths, CipherKind::Caesar);
        let cred = Credential::new("bob", Some("k3y".into()));

        let mut record = store.load(&cred).unwrap().unwrap();
        record.objectives.push(Objective::new("Chores"));
        store.save(&cred, &record).unwrap();

        let loaded = store.load(&cred).unwrap().unwrap();
        assert_eq!(loaded, record);
    }
}
