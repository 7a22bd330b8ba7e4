//! Test Module
//!
//! Test suite for the TaskSense core.
//!
//! ## Test Categories
//! - `brain_tests`: priority, category, negation, entities, confidence, reasoning
//! - `intake_tests`: request validation, caller overrides, task records
//! - `config_tests`: environment parsing and vocabulary files

pub mod intake_tests;
