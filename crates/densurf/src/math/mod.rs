//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by density estimation:
//! - Normalized kernels and the normal density
//! - Rule-of-thumb bandwidths
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normalized smoothing kernels.
pub mod kernel;

/// Bandwidth selection rules.
pub mod bandwidth;
