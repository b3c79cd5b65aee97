//! Layer 3: Algorithms
//!
//! This layer implements the numeric core: two-stage linear interpolation over
//! grouped samples, and the per-group kernel density estimates that produce
//! those samples. It is orchestrated by the engine layer.

// Two-stage (y then x) linear interpolation.
pub mod interpolation;

// Per-group kernel density estimation.
pub mod density;
