//! Integration Tests Module
//!
//! End-to-end tests over real files and the built binary.

pub mod cli_smoke_test;
