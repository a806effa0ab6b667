//! Client side peek into a session token's payload.
//!
//! Nothing here verifies a signature. The decoded claims are only good for an
//! advisory expiry check and must never gate access to anything.

use base64::Engine;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::auth::credentials::{CredentialProvider, CredentialScope};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&base64::alphabet::URL_SAFE, LENIENT);
const STANDARD: GeneralPurpose = GeneralPurpose::new(&base64::alphabet::STANDARD, LENIENT);

/// Decodes the middle segment of a `header.payload.signature` token into its
/// JSON object. `None` for anything malformed.
pub fn decode_token(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let (_, payload, _) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .ok()?;

    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// `exp` claim of a token, in seconds since the epoch.
pub fn token_expiry(token: &str) -> Option<f64> {
    decode_token(token)?.get("exp")?.as_f64()
}

/// Advisory: a student token is stored and has not yet expired at `now`.
pub fn is_authenticated(credentials: &dyn CredentialProvider, now: DateTime<Utc>) -> bool {
    let Some(token) = credentials.bearer(CredentialScope::Student) else {
        return false;
    };

    let now = now.timestamp_millis() as f64 / 1000.0;
    token_expiry(&token).is_some_and(|exp| exp > now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::LocalStorage;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn mint(claims: Value) -> String {
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"not-checked")).unwrap()
    }

    #[test]
    fn decodes_payload_of_a_signed_token() {
        let token = mint(json!({ "sub": "student-7", "exp": 4102444800u64 }));
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims["sub"], "student-7");
        assert_eq!(token_expiry(&token), Some(4102444800.0));
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert_eq!(decode_token("a.b.c"), None);
        assert_eq!(decode_token("a.%%%%.c"), None);
        assert_eq!(decode_token("only-one-segment"), None);
        assert_eq!(decode_token("a.e30.c.d"), None);
        // `WzFd` is `[1]`: valid JSON but not a claims object
        assert_eq!(decode_token("a.WzFd.c"), None);
        assert_eq!(decode_token(""), None);
    }

    #[test]
    fn padded_standard_alphabet_is_accepted() {
        // {"a":1}
        assert!(decode_token("h.eyJhIjoxfQ==.s").is_some());
        assert!(decode_token("h.eyJhIjoxfQ.s").is_some());
    }

    #[test]
    fn expiry_check_uses_the_student_scope() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap().with_timezone(&Utc);
        let storage = LocalStorage::in_memory();
        assert!(!is_authenticated(&storage, now));

        storage.set("token", &mint(json!({ "exp": now.timestamp() + 60 }))).unwrap();
        assert!(!is_authenticated(&storage, now));

        storage.set("studentToken", &mint(json!({ "exp": now.timestamp() + 60 }))).unwrap();
        assert!(is_authenticated(&storage, now));

        storage.set("studentToken", &mint(json!({ "exp": now.timestamp() - 1 }))).unwrap();
        assert!(!is_authenticated(&storage, now));

        storage.set("studentToken", "garbage").unwrap();
        assert!(!is_authenticated(&storage, now));
    }
}
