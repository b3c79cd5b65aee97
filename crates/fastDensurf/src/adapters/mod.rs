//! Layer 5: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer to an
//! execution mode:
//!
//! - **Batch**: Unified adapter for parallel/sequential execution

// Unified batch adapter for surface evaluation.
pub mod batch;
