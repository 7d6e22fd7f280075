//! JSON entry points for [`O`].

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::{Tagged, UnexpectedKind};
use crate::o::O;

/// Failure to decode an [`O`] from JSON.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input did not have the `{"kind": string, "value": T}` shape.
    #[error("malformed option: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    UnexpectedKind(#[from] UnexpectedKind),
}

impl<T: Serialize + Default> O<T> {
    /// Encodes to a compact JSON string, `kind` first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<T: DeserializeOwned> O<T> {
    /// Decodes a JSON document into a new value.
    pub fn from_json(input: &[u8]) -> Result<Self, DecodeError> {
        let tagged: Tagged<T> = serde_json::from_slice(input)?;
        Ok(tagged.into_o()?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, DecodeError> {
        let tagged: Tagged<T> = serde_json::from_value(value)?;
        Ok(tagged.into_o()?)
    }

    /// Decodes `input` into `self`.
    ///
    /// On error `self` is reset to `O::None`; it never keeps a previously
    /// held value or a partially decoded one.
    pub fn decode_json(&mut self, input: &[u8]) -> Result<(), DecodeError> {
        match Self::from_json(input) {
            Ok(decoded) => {
                trace!(target: "option::json", kind = %decoded.kind(), "decoded option");
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                debug!(target: "option::json", %err, "failed to decode option, resetting to none");
                *self = O::None;
                Err(err)
            }
        }
    }
}
