//! Request-signature scheme for the token handshake.
//!
//! Every token call is signed by concatenating literal field-name tags with
//! their values, hashing the UTF-8 bytes with SM3, and hex-encoding the
//! digest in lowercase. The tag order is fixed by the platform and must be
//! reproduced byte for byte; there are no separators between tag and value.

use chinadep_crypto::hash::sm3_hex;

/// Build the signature payload for an apply-token call.
///
/// Layout: `appId{app_id}appSecret{app_secret}timestamp{timestamp_millis}`.
pub fn token_payload(app_id: &str, app_secret: &str, timestamp_millis: i64) -> String {
    format!("appId{app_id}appSecret{app_secret}timestamp{timestamp_millis}")
}

/// Build the signature payload for a refresh-token call.
///
/// Identical to [`token_payload`] with the current refresh token inserted
/// before the timestamp tag.
pub fn refresh_payload(
    app_id: &str,
    app_secret: &str,
    refresh_token: &str,
    timestamp_millis: i64,
) -> String {
    format!(
        "appId{app_id}appSecret{app_secret}refreshToken{refresh_token}timestamp{timestamp_millis}"
    )
}

/// Sign a payload: lowercase-hex SM3 over its UTF-8 bytes.
pub fn sign(payload: &str) -> String {
    sm3_hex(payload.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_payload_layout() {
        let payload = token_payload("my-app", "my-secret", 1700000000000);
        assert_eq!(payload, "appIdmy-appappSecretmy-secrettimestamp1700000000000");
    }

    #[test]
    fn test_refresh_payload_layout() {
        let payload = refresh_payload("my-app", "my-secret", "rt-1", 1700000000000);
        assert_eq!(
            payload,
            "appIdmy-appappSecretmy-secretrefreshTokenrt-1timestamp1700000000000"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let payload = token_payload("my-app", "my-secret", 1700000000000);
        assert_eq!(sign(&payload), sign(&payload));
    }

    #[test]
    fn test_sign_is_lowercase_hex() {
        let digest = sign("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_refresh_token_changes_signature() {
        let a = sign(&refresh_payload("my-app", "my-secret", "rt-1", 1700000000000));
        let b = sign(&refresh_payload("my-app", "my-secret", "rt-2", 1700000000000));
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_changes_signature() {
        let a = sign(&token_payload("my-app", "my-secret", 1700000000000));
        let b = sign(&token_payload("my-app", "my-secret", 1700000000001));
        assert_ne!(a, b);
    }
}
