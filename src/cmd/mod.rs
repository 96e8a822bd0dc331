//! Command module structure for the validate CLI

pub mod validate;
