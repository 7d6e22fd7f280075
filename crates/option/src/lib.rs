#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// O module
pub mod o;
pub use o::O;

pub mod codec;
pub use codec::{Kind, UnexpectedKind};

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub use json::DecodeError;
