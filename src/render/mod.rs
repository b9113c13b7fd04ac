//! Rasterization of recorded display lists.

/// Rendered frame type.
pub mod backend;
/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
