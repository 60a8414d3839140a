use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Encoding used for snapshots
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(u8)]
pub enum Serializer {
    /// Plain text
    Json = 0,
    /// Binary
    Postcard = 1,
}

impl Serializer {
    /// Serialize `value` into an owned byte buffer.
    pub fn serialize(self, value: &impl Serialize) -> Result<Box<[u8]>> {
        let bytes = match self {
            Self::Json => serde_json::to_vec(value)?,
            Self::Postcard => postcard::to_stdvec(value)?,
        }
        .into_boxed_slice();
        Ok(bytes)
    }

    /// Deserialize a value previously produced by [`Serializer::serialize`].
    pub fn deserialize<T: DeserializeOwned>(self, bytes: impl AsRef<[u8]>) -> Result<T> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes.as_ref())?),
            Self::Postcard => Ok(postcard::from_bytes(bytes.as_ref())?),
        }
    }
}

impl TryFrom<u8> for Serializer {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        let ser = match value {
            0 => Self::Json,
            1 => Self::Postcard,
            byte => return Err(Error::InvalidSerializer(byte)),
        };
        Ok(ser)
    }
}
