use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
#[cfg(test)]
use std::time::Duration;

use super::model::AuthenticatedUser;
use crate::core::config::AuthConfig;
use crate::core::error::AppError;

pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // Standard JWT claims (validated by jsonwebtoken library)
    sub: String,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(rename = "iat", default)]
    _iat: Option<u64>,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    #[cfg(test)]
    pub fn with_parts(secret: &str, issuer: &str, audience: &str, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::HS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only HS256 is allowed",
                header.alg
            )));
        }

        // Setup validation
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        // Decode and validate token
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        // sub carries the numeric user id used for audit stamps
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Auth("Token subject is not a valid user id".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    const SECRET: &str = "test-secret-test-secret-test-secret!";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        aud: String,
        iat: u64,
        exp: u64,
        email: Option<String>,
        roles: Vec<String>,
    }

    fn issue(sub: &str, roles: &[&str], exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = TestClaims {
            sub: sub.to_string(),
            iss: "amanah".to_string(),
            aud: "amanah-api".to_string(),
            iat: now as u64,
            exp: (now + exp_offset_secs) as u64,
            email: Some("user@example.org".to_string()),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtValidator {
        JwtValidator::with_parts(SECRET, "amanah", "amanah-api", Duration::from_secs(0))
    }

    #[test]
    fn test_valid_token() {
        let token = issue("42", &["manager"], 3600);
        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.roles, vec!["manager".to_string()]);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue("42", &["manager"], -3600);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue("42", &[], 3600);
        let other = JwtValidator::with_parts(
            "another-secret-another-secret-another!",
            "amanah",
            "amanah-api",
            Duration::from_secs(0),
        );
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let token = issue("not-a-number", &[], 3600);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }
}
