//! This module serves as the public API for the pure, stateless base32k kernels.
//!
//! The encoder and the length predictors are leaves. The decoder depends only
//! on the lane tables and the padding-marker convention the encoder
//! establishes; no kernel holds state between calls.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Lane tables and the padding marker.
pub mod lanes;

/// Bytes -> code points.
pub mod encoder;

/// Code points -> bytes.
pub mod decoder;

/// Buffer sizing.
pub mod length;

//==================================================================================
// 2. Re-exports
//==================================================================================

pub use decoder::{decode, decode_str};
pub use encoder::{encode, encode_to_string};
pub use length::{decoded_length, decoded_length_of, encoded_length};
