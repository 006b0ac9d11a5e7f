#![deny(missing_docs)]

//! Chinadep Platform SDK - Complete SDK.
//!
//! Re-exports all Chinadep SDK components for convenient single-crate usage.

pub use chinadep_client as client;
pub use chinadep_crypto as crypto;
