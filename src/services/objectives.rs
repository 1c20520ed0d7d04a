//! Objective service
//!
//! CRUD operations over a record's ordered objective list, addressed by
//! 1-based ordinal.

use crate::error::{VaultError, VaultResult};
use crate::models::{Credential, Objective, UserRecord};
use crate::storage::UserStore;

use super::load_record;

/// Service for objective management
pub struct ObjectiveService<'a> {
    store: &'a UserStore,
}

impl<'a> ObjectiveService<'a> {
    /// Create a new objective service
    pub fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// Append an objective with the given title
    ///
    /// A duplicate title (case-sensitive exact match) is a silent no-op:
    /// the record is returned unchanged and nothing is written.
    pub fn add(&self, credential: &Credential, title: &str) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        if record.has_objective(title) {
            return Ok(record);
        }

        record.objectives.push(Objective::new(title));
        self.store.save(credential, &record)?;
        Ok(record)
    }

    /// Delete the objective at a 1-based ordinal
    ///
    /// # Errors
    ///
    /// `OutOfRange` when the ordinal does not address an existing objective;
    /// the stored record is left unchanged.
    pub fn delete(&self, credential: &Credential, ordinal: usize) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        let len = record.objectives.len();
        if ordinal == 0 || ordinal > len {
            return Err(VaultError::objective_out_of_range(ordinal, len));
        }

        record.objectives.remove(ordinal - 1);
        self.store.save(credential, &record)?;
        Ok(record)
    }

    /// Set the title of the objective at a 1-based ordinal
    ///
    /// Unlike [`add`](Self::add), there is no duplicate check: renaming can
    /// create two objectives with the same title.
    pub fn rename(
        &self,
        credential: &Credential,
        ordinal: usize,
        new_title: &str,
    ) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        let len = record.objectives.len();
        let objective = record
            .objective_mut(ordinal)
            .ok_or_else(|| VaultError::objective_out_of_range(ordinal, len))?;

        objective.title = new_title.to_string();
        self.store.save(credential, &record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VaultPaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, UserStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, UserStore::new(paths))
    }

    #[test]
    fn test_add_objective() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        let record = service.add(&cred, "Gym").unwrap();
        assert_eq!(record.objectives.len(), 1);
        assert_eq!(record.objectives[0].title, "Gym");

        // Persisted, not just returned
        let loaded = store.load(&cred).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_duplicate_add_is_silent_noop() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "Gym").unwrap();
        let record = service.add(&cred, "Gym").unwrap();

        assert_eq!(record.objectives.len(), 1);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "Gym").unwrap();
        let record = service.add(&cred, "gym").unwrap();

        assert_eq!(record.objectives.len(), 2);
    }

    #[test]
    fn test_positional_delete() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "A").unwrap();
        service.add(&cred, "B").unwrap();
        service.add(&cred, "C").unwrap();

        let record = service.delete(&cred, 2).unwrap();
        let titles: Vec<_> = record.objectives.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_out_of_range_delete_leaves_record_unchanged() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "A").unwrap();
        service.add(&cred, "B").unwrap();
        service.add(&cred, "C").unwrap();
        service.delete(&cred, 2).unwrap();

        let err = service.delete(&cred, 5).unwrap_err();
        assert!(err.is_out_of_range());

        let record = store.load(&cred).unwrap().unwrap();
        let titles: Vec<_> = record.objectives.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_ordinal_zero_is_out_of_range() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "A").unwrap();
        assert!(service.delete(&cred, 0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_rename() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "Gym").unwrap();
        let record = service.rename(&cred, 1, "Fitness").unwrap();
        assert_eq!(record.objectives[0].title, "Fitness");
    }

    #[test]
    fn test_rename_permits_duplicates() {
        // Deliberate asymmetry with add: rename has no duplicate check
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::plain("alice");

        service.add(&cred, "Gym").unwrap();
        service.add(&cred, "Reading").unwrap();

        let record = service.rename(&cred, 2, "Gym").unwrap();
        assert_eq!(record.objectives[0].title, "Gym");
        assert_eq!(record.objectives[1].title, "Gym");
    }

    #[test]
    fn test_operations_under_encryption() {
        let (_temp_dir, store) = create_test_store();
        let service = ObjectiveService::new(&store);
        let cred = Credential::new("alice", Some("hunter2".into()));

        service.add(&cred, "Gym").unwrap();
        let record = service.add(&cred, "Reading").unwrap();
        assert_eq!(record.objectives.len(), 2);

        let loaded = store.load(&cred).unwrap().unwrap();
        assert_eq!(loaded, record);
    }
}
