//! Step definitions for task status change BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
