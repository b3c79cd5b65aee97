//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and utility functions used
//! throughout the crate. It has no dependencies on the higher layers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Per-group sorting and duplicate resolution.
pub mod sorting;

/// Grouped sample index.
pub mod index;

/// Mesh axes.
pub mod mesh;
