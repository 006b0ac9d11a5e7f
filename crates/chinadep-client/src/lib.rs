#![deny(missing_docs)]

//! # chinadep-client
//!
//! Client for the Chinadep blockchain-bridging platform's HTTP API.
//!
//! The client obtains and refreshes bearer tokens through an SM3-signed
//! handshake, then submits batches of digital-asset registration records.
//! Token state lives inside the client instance for its process lifetime;
//! nothing is persisted and nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use chinadep_client::{AssetRegistration, MetaverseAssetType, PlatformClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlatformClient::new("my-app-id", "my-app-secret");
//! client.apply_token().await?;
//!
//! let record = AssetRegistration::new(
//!     MetaverseAssetType::DigitalAsset,
//!     "Meta5y3xbhnu7daq",
//!     "0x3461B67661FE2f9Be3576Fb9a0d1E50933708231",
//! );
//! client.register_assets(&[record]).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod sign;
pub mod types;


pub use client::PlatformClient;
pub use error::{AuthError, RegisterError, StatusError};
pub use types::{
    AssetRegistration, CirculationInfo, ClientConfig, MetaverseAssetType, RegisterResponse,
    TokenResponse, TokenSession, TokenState, MAX_BATCH_SIZE,
};
