use crate::error::Result;
use crate::user::User;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_TTL: i64 = 3600; // 1 hour

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_idx
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    fn new(user: &User) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user.user_idx.to_string(),
            email: user.email.clone(),
            iat: now,
            exp: now + ACCESS_TOKEN_TTL,
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        self.exp < now
    }
}

/// Access-token issuer using HS256 with a shared secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Sign an access token for a user record.
    pub fn sign(&self, user: &User) -> Result<String> {
        let claims = Claims::new(user);
        let header = Header::new(Algorithm::HS256);

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Verify and decode an access token.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}
