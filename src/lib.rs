//! # parsum
//!
//! A CLI tool that sums pairs of integers loaded from a JSON file, fanning
//! the work out across a fixed number of parallel workers.
//!
//! ## Usage
//!
//! ```bash
//! parsum [--file data.json] [--workers 4]
//! ```
//!
//! ## Modules
//!
//! - `error` - Typed error taxonomy for the crate
//! - `loader` - Reading and deserializing record files
//! - `reduce` - Chunk planning and the parallel fork-join reduction
pub mod error;
pub mod loader;
pub mod reduce;
