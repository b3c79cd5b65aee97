//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for surface evaluation.
//! It distributes mesh rows across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
