//! Interactive console session
//!
//! Thin presentation glue over the services: a login prompt followed by a
//! single-letter command loop, first over objectives, then over the tasks of
//! an opened objective.

use std::io::{self, BufRead, Write};

use crate::display::{format_objectives_page, format_tasks_page};
use crate::error::{VaultError, VaultResult};
use crate::models::{Credential, UserRecord};
use crate::services::{ObjectiveService, TaskService, UserService};
use crate::storage::UserStore;

/// Run the interactive session until the user quits
pub fn run_session(store: &UserStore) -> VaultResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let (mut credential, mut record) = login(store, &mut input)?;
    println!("{}", format_objectives_page(&record));

    loop {
        match prompt(&mut input, "Command (+ - m o n < q): ")?.as_str() {
            "q" => return Ok(()),
            "<" => {
                let (cred, rec) = login(store, &mut input)?;
                credential = cred;
                record = rec;
                println!("{}", format_objectives_page(&record));
            }
            "+" => {
                let title = prompt(&mut input, "   Objective name: ")?;
                record = ObjectiveService::new(store).add(&credential, &title)?;
                println!("{}", format_objectives_page(&record));
            }
            "-" => {
                if let Some(ordinal) = prompt_ordinal(&mut input, "   Objective number: ")? {
                    match ObjectiveService::new(store).delete(&credential, ordinal) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                    println!("{}", format_objectives_page(&record));
                }
            }
            "m" => {
                if let Some(ordinal) = prompt_ordinal(&mut input, "   Objective number: ")? {
                    let title = prompt(&mut input, "   New title: ")?;
                    match ObjectiveService::new(store).rename(&credential, ordinal, &title) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                    println!("{}", format_objectives_page(&record));
                }
            }
            "n" => {
                let new_name = prompt(&mut input, "   New user name: ")?;
                record = UserService::new(store).rename(&credential, &new_name)?;
                credential = Credential::new(&record.user_name, credential.password().map(String::from));
                println!("{}", format_objectives_page(&record));
            }
            "o" => {
                if let Some(ordinal) = prompt_ordinal(&mut input, "   Objective number: ")? {
                    match format_tasks_page(&record, ordinal) {
                        Ok(page) => {
                            println!("{}", page);
                            record = run_tasks_loop(store, &credential, record, ordinal, &mut input)?;
                            println!("{}", format_objectives_page(&record));
                        }
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                }
            }
            "" => {}
            other => println!("   Unknown command '{}'", other),
        }
    }
}

/// Command loop over the tasks of one objective; returns on '<' or at EOF
fn run_tasks_loop(
    store: &UserStore,
    credential: &Credential,
    mut record: UserRecord,
    objective_ordinal: usize,
    input: &mut impl BufRead,
) -> VaultResult<UserRecord> {
    let tasks = TaskService::new(store);

    loop {
        match prompt(input, "Command (+ - m mn md <): ")?.as_str() {
            "<" | "q" => return Ok(record),
            "+" => {
                let title = prompt(input, "   Task name: ")?;
                let due_date = prompt(input, "   Due date: ")?;
                record = tasks.add(credential, objective_ordinal, &title, &due_date)?;
            }
            "-" => {
                if let Some(ordinal) = prompt_ordinal(input, "   Task number: ")? {
                    match tasks.delete(credential, objective_ordinal, ordinal) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                }
            }
            "m" => {
                if let Some(ordinal) = prompt_ordinal(input, "   Task number: ")? {
                    let title = prompt(input, "   New title: ")?;
                    let due_date = prompt(input, "   New due date: ")?;
                    match tasks.update(credential, objective_ordinal, ordinal, &title, &due_date) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                }
            }
            "mn" => {
                if let Some(ordinal) = prompt_ordinal(input, "   Task number: ")? {
                    let title = prompt(input, "   New title: ")?;
                    match tasks.rename(credential, objective_ordinal, ordinal, &title) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                }
            }
            "md" => {
                if let Some(ordinal) = prompt_ordinal(input, "   Task number: ")? {
                    let due_date = prompt(input, "   New due date: ")?;
                    match tasks.reschedule(credential, objective_ordinal, ordinal, &due_date) {
                        Ok(updated) => record = updated,
                        Err(e) if e.is_out_of_range() => println!("   {}", e),
                        Err(e) => return Err(e),
                    }
                }
            }
            "" => {}
            other => println!("   Unknown command '{}'", other),
        }

        match format_tasks_page(&record, objective_ordinal) {
            Ok(page) => println!("{}", page),
            // The objective itself may have vanished under a re-login
            Err(_) => return Ok(record),
        }
    }
}

/// Prompt for name and password until the store yields a usable record
fn login(store: &UserStore, input: &mut impl BufRead) -> VaultResult<(Credential, UserRecord)> {
    loop {
        let name = prompt(input, "User name: ")?;
        if name.is_empty() {
            println!("   User name cannot be empty");
            continue;
        }

        let password = rpassword::prompt_password("Password (leave empty for none): ")
            .map_err(|e| VaultError::Io(format!("Failed to read password: {}", e)))?;

        let credential = Credential::new(name, Some(password));
        match store.load(&credential)? {
            Some(record) => return Ok((credential, record)),
            None => println!("   Could not read a record for that name/password, try again"),
        }
    }
}

/// Print a prompt and read one trimmed line
fn prompt(input: &mut impl BufRead, label: &str) -> VaultResult<String> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| VaultError::Io(format!("Failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| VaultError::Io(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        // EOF behaves like quitting
        return Ok("q".to_string());
    }
    Ok(line.trim().to_string())
}

/// Prompt for a 1-based ordinal; reports and skips unparseable input
fn prompt_ordinal(input: &mut impl BufRead, label: &str) -> VaultResult<Option<usize>> {
    let text = prompt(input, label)?;
    match text.parse::<usize>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            println!("   '{}' is not a number", text);
            Ok(None)
        }
    }
}
