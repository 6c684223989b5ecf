#![forbid(unsafe_code)]

//! Core domain model and formulas for Stride.
//!
//! This crate provides:
//! - Workout records for running, sports walking and swimming
//! - Distance, mean speed and calorie formulas
//! - Summary formatting
//! - Package dispatch by workout type code
//! - Tunable coefficients loaded from configuration

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod message;
pub mod training;
pub mod dispatch;
pub mod packages;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Coefficients, Config};
pub use message::InfoMessage;
pub use training::{print_summary, Training};
pub use dispatch::{read_package, Dispatcher};
pub use packages::{load_packages, sample_packages, Package};
