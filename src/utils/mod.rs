//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code and record id generation

pub mod code_generator;
