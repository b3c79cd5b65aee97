//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer to
//! an execution mode. The core crate ships the sequential batch adapter;
//! extension crates provide parallel ones through the same builder.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for surface evaluation.
pub mod batch;
