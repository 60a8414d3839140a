use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::serializer::Serializer;

/// A copy of a queue's indices and live elements, taken with
/// [`CircularQueue::snapshot`](crate::CircularQueue::snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Size of the backing array
    pub slots: usize,
    /// Index of the slot before the oldest element
    pub front: usize,
    /// Index of the newest element
    pub rear: usize,
    /// Live elements, oldest first
    pub items: Vec<T>,
}

impl<T: Serialize> Snapshot<T> {
    /// Encode the snapshot with the given serializer.
    pub fn encode(&self, serializer: Serializer) -> Result<Box<[u8]>> {
        serializer.serialize(self)
    }
}
