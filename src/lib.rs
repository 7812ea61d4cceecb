//! Taskflow: task status workflow engine for the project tracker.
//!
//! This crate decides which task status changes are legal for a given role,
//! and which changes must carry a comment or a commit reference. Every
//! surface that can change a task's status (quick status control, full edit
//! form, detail tab) consults the same policy.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`workflow`]: Status workflow policy, transition validation, and the
//!   status change service

pub mod workflow;
