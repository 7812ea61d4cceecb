//! In-memory adapters for tests and embedding.

mod task;

pub use task::InMemoryTaskRepository;
