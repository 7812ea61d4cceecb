//! Unit tests for the task status workflow.

mod property_tests;
