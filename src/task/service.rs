//! Task operations over a [`Store`]
//!
//! Every mutation is one full cycle: take the store lock, load the whole
//! collection, change it in memory and write it back. Listing and outcomes
//! that change nothing (`AlreadyDone`, `NotFound`) leave the disk untouched,
//! lock file included.

use tracing::{debug, info};

use super::error::{Result, TaskError};
use super::model::{renumber, CompleteOutcome, DeleteOutcome, ListFilter, Task};
use super::store::Store;

pub struct TaskService {
    store: Store,
}

/// Tasks yielded by [`TaskService::list`], in stored order
pub struct Listing {
    total: usize,
    filter: ListFilter,
    tasks: std::vec::IntoIter<Task>,
}

impl Listing {
    /// Size of the whole collection, before filtering
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for Listing {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        let filter = self.filter;
        self.tasks.find(|task| filter.accepts(task))
    }
}

impl TaskService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Append a new pending task and return it
    pub fn add(&self, title: &str) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(TaskError::InvalidInput("task title is empty".to_string()));
        }

        let task = self.write_locked(|tasks| {
            let task = Task::new(tasks.len() as u32 + 1, title);
            tasks.push(task.clone());
            (task, true)
        })?;

        info!("Added task #{} to {}", task.id, self.store.path().display());
        Ok(task)
    }

    /// Tasks in stored order, optionally skipping completed ones
    ///
    /// Reads without the lock; saves replace the file atomically, so a
    /// reader always sees one complete collection.
    pub fn list(&self, filter: ListFilter) -> Result<Listing> {
        let tasks = self.store.load()?;
        debug!("Listing {} tasks with {:?}", tasks.len(), filter);
        Ok(Listing {
            total: tasks.len(),
            filter,
            tasks: tasks.into_iter(),
        })
    }

    /// Mark the task at position `id` as done
    pub fn complete(&self, id: u32) -> Result<CompleteOutcome> {
        let outcome = self.update(|tasks| {
            let Some(task) = position(id).and_then(|index| tasks.get_mut(index)) else {
                return (CompleteOutcome::NotFound, false);
            };
            if task.done {
                return (CompleteOutcome::AlreadyDone, false);
            }
            task.done = true;
            (CompleteOutcome::Completed, true)
        })?;

        if outcome == CompleteOutcome::Completed {
            info!("Completed task #{}", id);
        }
        Ok(outcome)
    }

    /// Remove the task at position `id`, shifting later ids down by one
    pub fn delete(&self, id: u32) -> Result<DeleteOutcome> {
        let outcome = self.update(|tasks| {
            match position(id).filter(|&index| index < tasks.len()) {
                Some(index) => {
                    tasks.remove(index);
                    (DeleteOutcome::Deleted, true)
                }
                None => (DeleteOutcome::NotFound, false),
            }
        })?;

        if outcome == DeleteOutcome::Deleted {
            info!("Deleted task #{}", id);
        }
        Ok(outcome)
    }

    /// Apply a change only if it would change something
    ///
    /// `apply` first runs against an unlocked read. If it reports no change
    /// nothing is locked or written; otherwise it is re-run on a fresh load
    /// under the lock, so a concurrent writer cannot be overwritten.
    fn update<T>(&self, apply: impl Fn(&mut Vec<Task>) -> (T, bool)) -> Result<T> {
        let mut preview = self.store.load()?;
        let (outcome, changed) = apply(&mut preview);
        if !changed {
            return Ok(outcome);
        }
        self.write_locked(apply)
    }

    fn write_locked<T>(&self, apply: impl FnOnce(&mut Vec<Task>) -> (T, bool)) -> Result<T> {
        self.store.create_parent_dir()?;
        let _lock = self.store.lock()?;

        let mut tasks = self.store.load()?;
        renumber(&mut tasks);
        let (outcome, changed) = apply(&mut tasks);
        if changed {
            renumber(&mut tasks);
            self.store.save(&tasks)?;
        }
        Ok(outcome)
    }
}

/// Zero-based index for a positional id; id 0 never matches
fn position(id: u32) -> Option<usize> {
    (id as usize).checked_sub(1)
}
