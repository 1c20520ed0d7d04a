//! Business logic layer for TaskVault
//!
//! Each operation re-loads the full record from the store, mutates the
//! in-memory sequence, writes the full record back, and returns the updated
//! record. There is no incremental update and no locking; a single active
//! session per user is assumed.

pub mod objectives;
pub mod tasks;
pub mod user;

pub use objectives::ObjectiveService;
pub use tasks::TaskService;
pub use user::UserService;

use crate::error::{VaultError, VaultResult};
use crate::models::{Credential, UserRecord};
use crate::storage::UserStore;

/// Load a record for mutation, failing when the store has no usable record
fn load_record(store: &UserStore, credential: &Credential) -> VaultResult<UserRecord> {
    store.load(credential)?.ok_or_else(|| {
        VaultError::Deserialize(format!(
            "No usable record for user '{}'",
            credential.name()
        ))
    })
}
