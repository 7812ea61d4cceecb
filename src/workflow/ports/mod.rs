//! Port contracts for the status change service.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
