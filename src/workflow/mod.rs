//! Task status workflow engine.
//!
//! Decides which status changes a role may make, and whether a change must
//! carry a comment or a commit reference. Every surface that changes a task's
//! status consults the same [`policy::WorkflowPolicy`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The policy table and its queries in [`policy`]
//! - Transition validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
