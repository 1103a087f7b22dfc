//! Experience Memory
//!
//! Replay buffers for storing and splitting experiences, plus the
//! on-disk buffer file format.

pub mod experience;
pub mod replay_buffer;
pub mod store;

pub use experience::Experience;
pub use replay_buffer::{ReplayBuffer, SplitOutcome};
pub use store::BufferFileInfo;
