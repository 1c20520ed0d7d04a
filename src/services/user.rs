//! User service
//!
//! Record-level operations that are not about objectives or tasks.

use crate::error::VaultResult;
use crate::models::{Credential, UserRecord};
use crate::storage::UserStore;

use super::load_record;

/// Service for user-level record changes
pub struct UserService<'a> {
    store: &'a UserStore,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// Change the record's user name
    ///
    /// The record is written under the NEW name; the file stored under the
    /// old name is not removed, so a stale copy remains behind. Subsequent
    /// loads must use a credential carrying the new name.
    pub fn rename(&self, credential: &Credential, new_name: &str) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        record.user_name = new_name.to_string();
        self.store.save(credential, &record)?;
        Ok(record)
    }
}
