//! Task service
//!
//! CRUD operations over the task list of one objective, both addressed by
//! 1-based ordinal.

use crate::error::{VaultError, VaultResult};
use crate::models::{Credential, Objective, Task, UserRecord};
use crate::storage::UserStore;

use super::load_record;

/// Service for task management
pub struct TaskService<'a> {
    store: &'a UserStore,
}

impl<'a> TaskService<'a> {
    /// Create a new task service
    pub fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// Append a task under the objective at `objective_ordinal`
    ///
    /// A duplicate task title within that objective is a silent no-op.
    pub fn add(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        title: &str,
        due_date: &str,
    ) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        let objective = resolve_objective(&mut record, objective_ordinal)?;
        if objective.has_task(title) {
            return Ok(record);
        }

        objective.tasks.push(Task::new(title, due_date));
        self.store.save(credential, &record)?;
        Ok(record)
    }

    /// Delete the task at `task_ordinal` under the given objective
    pub fn delete(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        task_ordinal: usize,
    ) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        let objective = resolve_objective(&mut record, objective_ordinal)?;
        let len = objective.tasks.len();
        if task_ordinal == 0 || task_ordinal > len {
            return Err(VaultError::task_out_of_range(task_ordinal, len));
        }

        objective.tasks.remove(task_ordinal - 1);
        self.store.save(credential, &record)?;
        Ok(record)
    }

    /// Replace both title and due date of a task
    pub fn update(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        task_ordinal: usize,
        new_title: &str,
        new_due_date: &str,
    ) -> VaultResult<UserRecord> {
        self.modify(credential, objective_ordinal, task_ordinal, |task| {
            task.title = new_title.to_string();
            task.due_date = new_due_date.to_string();
        })
    }

    /// Replace only the title of a task
    pub fn rename(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        task_ordinal: usize,
        new_title: &str,
    ) -> VaultResult<UserRecord> {
        self.modify(credential, objective_ordinal, task_ordinal, |task| {
            task.title = new_title.to_string();
        })
    }

    /// Replace only the due date of a task
    pub fn reschedule(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        task_ordinal: usize,
        new_due_date: &str,
    ) -> VaultResult<UserRecord> {
        self.modify(credential, objective_ordinal, task_ordinal, |task| {
            task.due_date = new_due_date.to_string();
        })
    }

    /// Shared load-mutate-save path for the modify operations
    fn modify(
        &self,
        credential: &Credential,
        objective_ordinal: usize,
        task_ordinal: usize,
        apply: impl FnOnce(&mut Task),
    ) -> VaultResult<UserRecord> {
        let mut record = load_record(self.store, credential)?;

        let objective = resolve_objective(&mut record, objective_ordinal)?;
        let len = objective.tasks.len();
        let task = task_ordinal
            .checked_sub(1)
            .and_then(|i| objective.tasks.get_mut(i))
            .ok_or_else(|| VaultError::task_out_of_range(task_ordinal, len))?;

        apply(task);
        self.store.save(credential, &record)?;
        Ok(record)
    }
}

/// Resolve the objective at a 1-based ordinal, mutably
fn resolve_objective(
    record: &mut UserRecord,
    ordinal: usize,
) -> VaultResult<&mut Objective> {
    let len = record.objectives.len();
    record
        .objective_mut(ordinal)
        .ok_or_else(|| VaultError::objective_out_of_range(ordinal, len))
}
