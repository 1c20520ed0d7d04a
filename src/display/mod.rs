//! Console page formatting
//!
//! Formats objective and task listings for terminal output. Ordinals shown
//! here are the same 1-based positions the services accept.

use crate::error::{VaultError, VaultResult};
use crate::models::UserRecord;

/// Format the objectives page for a record
pub fn format_objectives_page(record: &UserRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("Objectives — {}\n", record.user_name));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if record.objectives.is_empty() {
        output.push_str("  (no objectives yet — add one with '+')\n");
        return output;
    }

    for (i, objective) in record.objectives.iter().enumerate() {
        let count = objective.tasks.len();
        let noun = if count == 1 { "task" } else { "tasks" };
        output.push_str(&format!(
            "  {}. {} ({} {})\n",
            i + 1,
            objective.title,
            count,
            noun
        ));
    }

    output
}

/// Format the tasks page for one objective
///
/// # Errors
///
/// `OutOfRange` when the ordinal does not address an existing objective.
pub fn format_tasks_page(record: &UserRecord, objective_ordinal: usize) -> VaultResult<String> {
    let len = record.objectives.len();
    let objective = record
        .objective(objective_ordinal)
        .ok_or_else(|| VaultError::objective_out_of_range(objective_ordinal, len))?;

    let mut output = String::new();
    output.push_str(&format!("Tasks — {}\n", objective.title));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if objective.tasks.is_empty() {
        output.push_str("  (no tasks yet — add one with '+')\n");
        return Ok(output);
    }

    let title_width = objective
        .tasks
        .iter()
        .map(|t| t.title.len())
        .max()
        .unwrap_or(4)
        .max(4);

    for (i, task) in objective.tasks.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {:<width$}  due {}\n",
            i + 1,
            task.title,
            task.due_date,
            width = title_width
        ));
    }

    Ok(output)
}
