//! Task tracking core
//!
//! - JSON file persistence with a sidecar lock and backup
//! - Positional ids that are renumbered on every write
//! - Add / list / complete / delete operations

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{Result, TaskError};
pub use model::{CompleteOutcome, DeleteOutcome, ListFilter, Task};
pub use service::{Listing, TaskService};
pub use store::{Store, StoreLock};
