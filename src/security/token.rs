use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

/// Payload of the stored auth token. Only the expiry matters here; the
/// signature is checked by the backend on every API call.
#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub exp: Option<i64>,
}

impl FromStr for TokenClaims {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(parts) = s.split('.').nth(1) else {
            return Err("cant extract jwt parts".to_owned());
        };

        // some issuers keep the padding
        let parts = parts.trim_end_matches('=');

        let decoded_parts = URL_SAFE_NO_PAD.decode(parts.as_bytes()).map_err(|e| e.to_string())?;
        let serialized = String::from_utf8(decoded_parts).map_err(|e| e.to_string())?;
        serde_json::from_str::<Self>(&serialized).map_err(|e| e.to_string())
    }
}

impl TokenClaims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self.exp {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_for_test(payload: &str) -> String {
    format!(
        "{header}.{payload}.signature",
        header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        payload = URL_SAFE_NO_PAD.encode(payload),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_expiry_from_payload() {
        let claims: TokenClaims = encode_for_test(r#"{"id":1,"exp":1700000000}"#).parse().unwrap();

        assert_eq!(claims.exp, Some(1_700_000_000));
        assert!(!claims.is_expired_at(1_699_999_999));
        assert!(claims.is_expired_at(1_700_000_000));
    }

    #[test]
    fn missing_expiry_never_expires() {
        let claims: TokenClaims = encode_for_test(r#"{"p":"x"}"#).parse().unwrap();
        assert!(!claims.is_expired_at(i64::MAX));
    }

    #[test]
    fn rejects_tokens_without_payload() {
        assert!("opaque-token".parse::<TokenClaims>().is_err());
        assert!("a.%%%.c".parse::<TokenClaims>().is_err());
    }
}
