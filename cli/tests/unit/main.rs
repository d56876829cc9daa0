//! Unit tests for clutch CLI
//!
//! These tests use in-memory fakes and run fast without a Docker Desktop.

mod create_command;
