//! Serde support for [`O`].
//!
//! Both variants encode to the same two-field shape:
//!
//! ```text
//! {"kind":"Some","value":42}
//! {"kind":"None","value":0}
//! ```
//!
//! An absent value still carries a `value` field holding `T::default()`, so
//! statically typed decoders see one uniform shape. This is why `Serialize`
//! needs `T: Default` while the container itself does not.
//!
//! Decoding requires both fields: a missing `value` is rejected even when
//! `kind` is `"None"`, rather than filled in with the default.

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::o::O;

/// The `kind` tag of an encoded [`O`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Some,
    None,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Some => "Some",
            Kind::None => "None",
        }
    }

    /// Matches a tag exactly; tags are case sensitive.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "Some" => Some(Kind::Some),
            "None" => Some(Kind::None),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> O<T> {
    /// The tag this value encodes with.
    pub fn kind(&self) -> Kind {
        match self {
            O::Some(_) => Kind::Some,
            O::None => Kind::None,
        }
    }
}

/// Decoded `kind` was neither `"Some"` nor `"None"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedKind(pub String);

impl fmt::Display for UnexpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected kind: {:?}", self.0)
    }
}

impl core::error::Error for UnexpectedKind {}

// Wire shape, encode side. Field order here is the canonical output order.
#[derive(Serialize)]
#[serde(rename = "O")]
struct TaggedRef<'a, T> {
    kind: &'static str,
    value: &'a T,
}

// Wire shape, decode side.
#[derive(Deserialize)]
#[serde(rename = "O", expecting = "an object with `kind` and `value` fields")]
pub(crate) struct Tagged<T> {
    kind: String,
    value: T,
}

impl<T> Tagged<T> {
    pub(crate) fn into_o(self) -> Result<O<T>, UnexpectedKind> {
        match Kind::parse(&self.kind) {
            Some(Kind::Some) => Ok(O::Some(self.value)),
            // value only had to be well formed
            Some(Kind::None) => Ok(O::None),
            None => Err(UnexpectedKind(self.kind)),
        }
    }
}

impl<T: Serialize + Default> Serialize for O<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            O::Some(value) => TaggedRef { kind: Kind::Some.as_str(), value }.serialize(serializer),
            O::None => {
                let value = T::default();
                TaggedRef { kind: Kind::None.as_str(), value: &value }.serialize(serializer)
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for O<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Tagged::<T>::deserialize(deserializer)?.into_o().map_err(de::Error::custom)
    }
}
