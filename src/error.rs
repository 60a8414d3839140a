//! Errors

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Ringq errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tried to enqueue onto a full queue
    #[error("queue is full ({capacity} elements)")]
    CapacityExceeded {
        /// Number of elements the queue can hold
        capacity: usize,
    },

    /// Tried to peek or dequeue from an empty queue
    #[error("queue is empty")]
    EmptyQueue,

    /// Serde json error
    #[error("failed to encode snapshot: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Postcard error
    #[error("failed to encode snapshot: {0}")]
    Postcard(#[from] postcard::Error),

    /// Invalid serializer
    #[error("invalid serializer, the serializer was encoded incorrectly {0}")]
    InvalidSerializer(u8),
}
