#![deny(missing_docs)]

//! # chinadep-crypto
//!
//! Cryptographic primitives for the Chinadep SDK.
//!
//! The Chinadep open platform signs every token-handshake request with SM3,
//! the 256-bit hash function of GB/T 32905-2016. This crate wraps the
//! RustCrypto `sm3` implementation behind the helpers the client needs.

pub mod hash;

pub use hash::{sm3, sm3_hex};
