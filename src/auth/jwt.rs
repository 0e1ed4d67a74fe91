use crate::error::{AppError, Result};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: i64,
}

/// Verify a bearer token minted by the account service and extract claims
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    fn mint(user_id: Uuid, secret: &str, expires_in: Duration) -> String {
        let claims = Claims {
            sub: user_id.to_string(),
            role: "user".to_string(),
            exp: (Utc::now() + expires_in).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_extracts_claims() {
        let user_id = Uuid::new_v4();
        let token = mint(user_id, "test-secret", Duration::hours(1));
        let claims = verify_jwt(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = mint(Uuid::new_v4(), "test-secret", Duration::hours(1));
        assert!(verify_jwt(&token, "other-secret").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let token = mint(Uuid::new_v4(), "test-secret", Duration::hours(-1));
        assert!(verify_jwt(&token, "test-secret").is_err());
    }
}
