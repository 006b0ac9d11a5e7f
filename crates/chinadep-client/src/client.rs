//! Platform client: token lifecycle and asset-registration submission.

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::error::{AuthError, RegisterError, StatusError};
use crate::sign;
use crate::types::{
    AssetRegistration, ClientConfig, RegisterResponse, TokenResponse, TokenSession, TokenState,
    MAX_BATCH_SIZE, REGISTER_CODE_SUCCESS, TOKEN_CODE_SUCCESS,
};

/// Path of the apply-token endpoint.
const APPLY_TOKEN_PATH: &str = "/platform/api/platform/token";
/// Path of the refresh-token endpoint.
const REFRESH_TOKEN_PATH: &str = "/platform/api/platform/refreshToken";
/// Path of the asset-registration endpoint.
const REGISTER_ASSETS_PATH: &str = "/api/v1/assets/register";

/// Client for the Chinadep platform API.
///
/// Holds the application credentials and the current token session. Every
/// operation performs exactly one network round trip and nothing is
/// retried; transient failures surface immediately to the caller. Token
/// state is guarded by a lock, so a single client can be shared across
/// concurrent call sites.
#[derive(Debug)]
pub struct PlatformClient {
    app_id: String,
    app_secret: String,
    config: ClientConfig,
    http: reqwest::Client,
    state: RwLock<TokenState>,
}

impl PlatformClient {
    /// Create a client with the default configuration. No I/O is performed.
    pub fn new(app_id: &str, app_secret: &str) -> Self {
        Self::with_config(app_id, app_secret, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(app_id: &str, app_secret: &str, config: ClientConfig) -> Self {
        Self {
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
            config,
            http: reqwest::Client::new(),
            state: RwLock::new(TokenState::Unauthenticated),
        }
    }

    /// Apply for a token session.
    ///
    /// Signs the request with SM3 over the credential payload and, on
    /// business success (code 1), stores the access token, refresh token,
    /// and absolute expiry. On business failure the stored token state is
    /// left untouched.
    pub async fn apply_token(&self) -> Result<(), AuthError> {
        debug!(app_id = %self.app_id, "applying for platform token");

        let res = self.token_request(APPLY_TOKEN_PATH, None).await?;

        if res.code != TOKEN_CODE_SUCCESS {
            warn!(code = res.code, msg = %res.msg, "token application rejected");
            return Err(AuthError::Rejected(res.msg));
        }

        self.store_session(res);
        Ok(())
    }

    /// Rotate the token session using the held refresh token.
    ///
    /// Fails locally with [`AuthError::NotAuthenticated`] when no session
    /// is held; the platform would reject a signature over an empty
    /// refresh token anyway.
    pub async fn refresh_token(&self) -> Result<(), AuthError> {
        let refresh_token = {
            let state = self.state.read().unwrap();
            match &*state {
                TokenState::Unauthenticated => return Err(AuthError::NotAuthenticated),
                TokenState::Authenticated(session) => session.refresh_token.clone(),
            }
        };

        debug!(app_id = %self.app_id, "refreshing platform token");

        let res = self
            .token_request(REFRESH_TOKEN_PATH, Some(&refresh_token))
            .await?;

        if res.code != TOKEN_CODE_SUCCESS {
            warn!(code = res.code, msg = %res.msg, "token refresh rejected");
            return Err(AuthError::Rejected(res.msg));
        }

        self.store_session(res);
        Ok(())
    }

    /// Register a batch of assets with the platform.
    ///
    /// Batch data is submitted as a JSON array, at most [`MAX_BATCH_SIZE`]
    /// records per call. Requires an unexpired token session; expiry is
    /// checked locally before any network traffic, and the caller decides
    /// when to refresh.
    pub async fn register_assets(
        &self,
        records: &[AssetRegistration],
    ) -> Result<(), RegisterError> {
        if records.len() > MAX_BATCH_SIZE {
            return Err(RegisterError::BatchTooLarge(records.len()));
        }

        let access_token = {
            let state = self.state.read().unwrap();
            match &*state {
                TokenState::Unauthenticated => return Err(RegisterError::NotAuthenticated),
                TokenState::Authenticated(session) => {
                    if now_millis() >= session.expires_at_millis {
                        return Err(RegisterError::TokenExpired);
                    }
                    session.access_token.clone()
                }
            }
        };

        let body = serde_json::to_vec(records)?;
        let url = format!("{}{}", self.config.base_url, REGISTER_ASSETS_PATH);

        debug!(batch = records.len(), "registering assets");

        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .header(CONTENT_TYPE, "application/json")
            .header("appid", self.app_id.as_str())
            .header("access-token", access_token.as_str())
            .body(body)
            .send()
            .await?;

        StatusError::check(resp.status().as_u16())?;

        let text = resp.text().await?;
        let res: RegisterResponse = serde_json::from_str(&text)?;

        if res.code != REGISTER_CODE_SUCCESS {
            warn!(code = res.code, msg = %res.msg, "asset registration rejected");
            return Err(RegisterError::Rejected(res.msg));
        }

        Ok(())
    }

    /// Current access token, if a session is held.
    pub fn access_token(&self) -> Option<String> {
        match &*self.state.read().unwrap() {
            TokenState::Unauthenticated => None,
            TokenState::Authenticated(session) => Some(session.access_token.clone()),
        }
    }

    /// Absolute access-token expiry in milliseconds since the Unix epoch.
    pub fn expires_at_millis(&self) -> Option<i64> {
        match &*self.state.read().unwrap() {
            TokenState::Unauthenticated => None,
            TokenState::Authenticated(session) => Some(session.expires_at_millis),
        }
    }

    /// Whether the held access token has passed its expiry.
    ///
    /// An unauthenticated client counts as expired.
    pub fn is_expired(&self) -> bool {
        match &*self.state.read().unwrap() {
            TokenState::Unauthenticated => true,
            TokenState::Authenticated(session) => now_millis() >= session.expires_at_millis,
        }
    }

    /// Issue a signed GET against one of the token endpoints and decode
    /// the envelope. `refresh_token` extends both the query and the
    /// signature payload.
    async fn token_request(
        &self,
        path: &str,
        refresh_token: Option<&str>,
    ) -> Result<TokenResponse, AuthError> {
        let timestamp = now_millis();
        let payload = match refresh_token {
            None => sign::token_payload(&self.app_id, &self.app_secret, timestamp),
            Some(rt) => sign::refresh_payload(&self.app_id, &self.app_secret, rt, timestamp),
        };
        let signature = sign::sign(&payload);
        let timestamp = timestamp.to_string();

        let mut query: Vec<(&str, &str)> = vec![("appId", self.app_id.as_str())];
        if let Some(rt) = refresh_token {
            query.push(("refreshToken", rt));
        }
        query.push(("timestamp", &timestamp));
        query.push(("sign", &signature));

        let url = format!("{}{}", self.config.base_url, path);

        let resp = self
            .http
            .get(&url)
            .timeout(self.config.timeout)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .query(&query)
            .send()
            .await?;

        StatusError::check(resp.status().as_u16())?;

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Store a successful token envelope as the current session.
    fn store_session(&self, res: TokenResponse) {
        let session = TokenSession {
            access_token: res.data.access_token,
            refresh_token: res.data.refresh_token,
            expires_at_millis: now_millis() + res.data.expires_in,
        };
        let mut state = self.state.write().unwrap();
        *state = TokenState::Authenticated(session);
    }
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
