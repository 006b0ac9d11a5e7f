//! Chinadep data types: configuration, token state, asset registration
//! records, and API response envelopes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Business success code returned by the token endpoints.
///
/// The token API and the registration API use different success-code
/// conventions; the two constants must never be unified.
pub const TOKEN_CODE_SUCCESS: i64 = 1;

/// Business success code returned by the asset-registration endpoint.
pub const REGISTER_CODE_SUCCESS: i64 = 200;

/// Maximum number of records accepted per registration batch.
pub const MAX_BATCH_SIZE: usize = 100;

/// Configuration for a [`PlatformClient`](crate::PlatformClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the platform API (e.g. `https://open.chinadep.com`).
    pub base_url: String,
    /// Timeout applied to every network round trip.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://open.chinadep.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// A bearer-token session issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSession {
    /// Short-lived bearer credential sent with registration calls.
    pub access_token: String,
    /// Longer-lived credential used to rotate the session.
    pub refresh_token: String,
    /// Absolute access-token expiry, in milliseconds since the Unix epoch.
    pub expires_at_millis: i64,
}

/// Authentication state of a [`PlatformClient`](crate::PlatformClient).
///
/// Refresh and registration require an `Authenticated` state; calling them
/// first fails locally instead of making a doomed network round trip.
#[derive(Debug, Clone, Default)]
pub enum TokenState {
    /// No token has been obtained yet.
    #[default]
    Unauthenticated,
    /// A token session is held.
    Authenticated(TokenSession),
}

/// Metaverse asset category carried in the `metaverseAssetType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaverseAssetType {
    /// A digital asset.
    DigitalAsset,
    /// Digital rights.
    DigitalRights,
    /// Anything else.
    Other,
}

impl MetaverseAssetType {
    /// Returns the integer code used by the platform API.
    pub fn as_code(&self) -> i32 {
        match self {
            Self::DigitalAsset => 1,
            Self::DigitalRights => 2,
            Self::Other => 3,
        }
    }

    /// Parse a platform integer code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::DigitalAsset),
            2 => Some(Self::DigitalRights),
            3 => Some(Self::Other),
            _ => None,
        }
    }
}

impl Serialize for MetaverseAssetType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_code())
    }
}

impl<'de> Deserialize<'de> for MetaverseAssetType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        Self::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown metaverse asset type code: {code}"))
        })
    }
}

/// A single digital-asset registration record.
///
/// Submitted in batches of at most [`MAX_BATCH_SIZE`] per call. Field-level
/// validation (required fields present, codes in range) is the remote
/// service's responsibility, not the client's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRegistration {
    /// Asset category.
    pub metaverse_asset_type: MetaverseAssetType,
    /// Consortium (chain side) identifier.
    pub chain_id: String,
    /// Contract address.
    pub contract_addr: String,
    /// Series identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,
    /// Series name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    /// Series business category (1=cultural, 2=museum derivative, 3=brand
    /// marketing, 4=consumer scene, 5=industrial, 6=data IP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_biz_type: Option<i32>,
    /// Series cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_cover_img_url: Option<String>,
    /// Series description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_desc: Option<String>,
    /// Series media form (1=image, 2=animated image, 3=video, 4=audio,
    /// 5=3D model, 6=text, 7=other).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_media_type: Option<i32>,
    /// Series creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    /// Number of assets minted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_number: Option<i64>,
    /// Series metadata URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
    /// Issuer identity type (1=national ID, 2=unified social credit code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id_type: Option<i32>,
    /// Issuer identity number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// Issuer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    /// IP holder identity type (1=national ID, 2=unified social credit code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_id_type: Option<i32>,
    /// IP holder identity number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_id: Option<String>,
    /// IP holder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_name: Option<String>,
    /// Circulation channels for the series.
    #[serde(default)]
    pub circulation_info: CirculationInfo,
}

impl AssetRegistration {
    /// Create a record with the required fields set and everything else
    /// empty.
    pub fn new(
        metaverse_asset_type: MetaverseAssetType,
        chain_id: &str,
        contract_addr: &str,
    ) -> Self {
        Self {
            metaverse_asset_type,
            chain_id: chain_id.to_string(),
            contract_addr: contract_addr.to_string(),
            series_id: None,
            series_name: None,
            series_biz_type: None,
            series_cover_img_url: None,
            series_desc: None,
            series_media_type: None,
            create_time: None,
            mint_number: None,
            metadata_url: None,
            issuer_id_type: None,
            issuer_id: None,
            issuer_name: None,
            ip_id_type: None,
            ip_id: None,
            ip_name: None,
            circulation_info: CirculationInfo::default(),
        }
    }
}

/// Circulation channels for a series, keyed by the platform's numeric
/// channel codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CirculationInfo {
    /// Quantity sold on-platform (channel `1`).
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub platform_selling: Option<i64>,
    /// Quantity claimable by users (channel `2`).
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub receive: Option<i64>,
    /// Quantity airdropped (channel `3`).
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub airdrop: Option<i64>,
}

/// Envelope returned by the token endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Platform status string (e.g. `"0000"`).
    #[serde(default)]
    pub status: String,
    /// Service-supplied message.
    #[serde(default)]
    pub msg: String,
    /// Business code; [`TOKEN_CODE_SUCCESS`] indicates success.
    #[serde(default)]
    pub code: i64,
    /// Success flag mirrored from `code`.
    #[serde(default)]
    pub success: bool,
    /// Token payload, populated on success.
    #[serde(default)]
    pub data: TokenData,
}

/// Token payload inside a [`TokenResponse`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    /// Bearer token for subsequent registration calls.
    #[serde(default)]
    pub access_token: String,
    /// Credential used to rotate the session.
    #[serde(default)]
    pub refresh_token: String,
    /// Token lifetime in milliseconds from the time of the response.
    #[serde(default)]
    pub expires_in: i64,
}

/// Envelope returned by the asset-registration endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Platform status string (e.g. `"ok"`).
    #[serde(default)]
    pub status: String,
    /// Business code; [`REGISTER_CODE_SUCCESS`] indicates success.
    #[serde(default)]
    pub code: i64,
    /// Service-supplied message.
    #[serde(default)]
    pub msg: String,
    /// Per-record results; unused by the client beyond existence.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}
