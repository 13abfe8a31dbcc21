//! Integration test utilities for the chat client
//!
//! This crate provides channel/notifier doubles and event builders for
//! exercising the client core end to end without a live relay.

pub mod helpers;

pub use helpers::*;
