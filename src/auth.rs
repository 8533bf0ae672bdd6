//! Admin credential checks and stateless session tokens.
//!
//! A token is `base64url(claims JSON) + "." + base64url(HMAC-SHA1 of the
//! encoded claims)`. Nothing is stored server-side; validity is entirely
//! determined by the signature and the embedded expiry, so verification is
//! pure and safe to call from any number of concurrent requests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;

use crate::config::AppConfig;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    /// Unix seconds.
    pub exp: i64,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

/// Checks the supplied login pair against the configured admin account.
pub fn authenticate(config: &AppConfig, username: &str, password: &str) -> bool {
    username == config.admin_username && password == config.admin_password
}

pub fn issue_token(secret: &str, subject: &str, role: &str, ttl: Duration) -> String {
    let claims = Claims {
        sub: subject.to_string(),
        role: role.to_string(),
        exp: (Utc::now() + ttl).timestamp(),
    };
    // Claims are plain serializable fields; serialization cannot fail.
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap_or_default());
    let signature = URL_SAFE_NO_PAD.encode(sign(secret, payload.as_bytes()));
    format!("{payload}.{signature}")
}

/// Validates signature then expiry. Expiry uses `exp <= now`, so a token
/// issued with a zero TTL is already expired.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let (payload, signature) = token.split_once('.').ok_or(AuthError::Malformed)?;

    let sig_bytes = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| AuthError::InvalidSignature)?;

    let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
        .map_err(|_| AuthError::InvalidSignature)?;
    mac.update(payload.as_bytes());
    mac.verify_slice(&sig_bytes)
        .map_err(|_| AuthError::InvalidSignature)?;

    let claims_bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::Malformed)?;
    let claims: Claims =
        serde_json::from_slice(&claims_bytes).map_err(|_| AuthError::Malformed)?;

    if claims.exp <= Utc::now().timestamp() {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}

fn sign(secret: &str, data: &[u8]) -> Vec<u8> {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    const SECRET: &str = "test-secret";

    fn config() -> AppConfig {
        AppConfig {
            port: 3000,
            database_url: ":memory:".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "hunter2".to_string(),
            session_secret: SECRET.to_string(),
            session_ttl_minutes: 60,
            email_api_url: String::new(),
            email_api_key: String::new(),
            email_from: String::new(),
            business_email: String::new(),
        }
    }

    #[test]
    fn test_authenticate_accepts_configured_pair() {
        let cfg = config();
        assert!(authenticate(&cfg, "admin", "hunter2"));
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let cfg = config();
        assert!(!authenticate(&cfg, "admin", "hunter3"));
        assert!(!authenticate(&cfg, "root", "hunter2"));
        assert!(!authenticate(&cfg, "", ""));
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token(SECRET, "admin", ADMIN_ROLE, Duration::minutes(5));
        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let token = issue_token(SECRET, "admin", ADMIN_ROLE, Duration::zero());
        assert_eq!(verify_token(SECRET, &token), Err(AuthError::Expired));
    }

    #[test]
    fn test_tampered_signature_fails() {
        let token = issue_token(SECRET, "admin", ADMIN_ROLE, Duration::minutes(5));
        let (payload, signature) = token.split_once('.').unwrap();

        // Flip one character of the signature segment.
        let mut sig: Vec<u8> = signature.bytes().collect();
        sig[0] = if sig[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{payload}.{}", String::from_utf8(sig).unwrap());

        assert_eq!(
            verify_token(SECRET, &tampered),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_fails() {
        let token = issue_token(SECRET, "admin", ADMIN_ROLE, Duration::minutes(5));
        let (payload, signature) = token.split_once('.').unwrap();

        let mut p: Vec<u8> = payload.bytes().collect();
        p[0] = if p[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{signature}", String::from_utf8(p).unwrap());

        assert_eq!(
            verify_token(SECRET, &tampered),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify_token(SECRET, ""), Err(AuthError::Malformed));
        assert_eq!(verify_token(SECRET, "no-dot-here"), Err(AuthError::Malformed));
        assert_eq!(
            verify_token(SECRET, "!!!.???"),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = issue_token(SECRET, "admin", ADMIN_ROLE, Duration::minutes(5));
        assert_eq!(
            verify_token("other-secret", &token),
            Err(AuthError::InvalidSignature)
        );
    }
}
