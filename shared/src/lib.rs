//! Training Tracker Shared Library
//!
//! This crate contains the whole calculator: the workout variants with their
//! formula sets, the tag dispatcher, and the report formatter. Everything in
//! here is pure computation over immutable values; process concerns (input
//! adapters, logging, exit codes) live in the CLI crate.

pub mod dispatch;
pub mod errors;
pub mod report;
pub mod training;

// Re-export commonly used items
pub use dispatch::{read_package, WorkoutTag};
pub use errors::DispatchError;
pub use report::TrainingReport;
pub use training::{Running, SportsWalking, Swimming, Training};
