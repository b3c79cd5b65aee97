//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates surface evaluation: it validates parameters, lays
//! out the mesh, runs the mesh pass and shapes the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mesh layout and evaluation.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for surface evaluation.
pub mod output;
