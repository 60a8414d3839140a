#![deny(missing_docs)]
//! Ringq is a fixed-capacity circular queue

pub mod error;
mod queue;
mod serializer;
mod snapshot;

pub use queue::{CircularQueue, IntQueue, Iter, DEFAULT_SLOTS};
pub use serializer::Serializer;
pub use snapshot::Snapshot;
