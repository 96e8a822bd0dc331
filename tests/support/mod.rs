//! Shared helpers for the validate binary tests

pub mod harness;
