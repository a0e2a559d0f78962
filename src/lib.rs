//! Expected-key fixtures for keyboard layout tests.
//!
//! This library provides declarative descriptions of keyboard layout
//! variants (per-row expected key labels plus long-press alternates)
//! consumed by an input-method test harness, together with the builder
//! used to assemble them and a validator for authoring checks.

// Module declarations
pub mod builder;
pub mod cli;
pub mod constants;
pub mod layouts;
pub mod models;
pub mod validator;
