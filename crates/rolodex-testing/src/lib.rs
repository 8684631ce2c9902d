//! Testing infrastructure for rolodex tests.
//!
//! This crate provides utilities shared across the workspace's test suites:
//! - `fixtures`: sample directory records mirroring the upstream API
//! - `source`: `FixtureDirectory`, an in-memory source with failure injection

pub mod fixtures;
pub mod source;

pub use source::FixtureDirectory;
