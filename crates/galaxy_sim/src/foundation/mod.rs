//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the simulation:
//! - Math types and operations
//! - Injected random number generation
//! - Frame time bookkeeping
//! - Logging utilities

pub mod math;
pub mod random;
pub mod time;
pub mod logging;
