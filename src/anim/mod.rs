//! Tick loop, leader state and the acts it drives.

/// Built-in animations.
pub mod acts;
/// Trailing chains that follow a leader.
pub mod chain;
/// The per-tick loop.
pub mod driver;
/// Frame presentation contract.
pub mod host;
/// Leader position and clock.
pub mod state;
