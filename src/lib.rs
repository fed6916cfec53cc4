//! This file is the root of the `base32k` Rust crate.
//!
//! base32k is a binary-to-text encoding that trades byte efficiency for
//! character efficiency: every 15 bits of input become one CJK or Hangul glyph
//! (3 UTF-8 bytes), with a one-byte ASCII padding marker after a partial final
//! glyph. It only pays off where a medium limits characters rather than bytes.
//!
//! Its responsibilities here are strictly limited to:
//! 1.  Declaring the top-level modules of the library.
//! 2.  Re-exporting the public codec API.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod cli;
pub mod config;
pub mod error;
pub mod kernels;

//==================================================================================
// 2. Public API
//==================================================================================
pub use config::{CodecConfig, Mode};
pub use error::Base32kError;
pub use kernels::{
    decode, decode_str, decoded_length, decoded_length_of, encode, encode_to_string,
    encoded_length,
};
pub use observability::init_logging;

#[doc(hidden)]
pub use log as __log;
