use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::database::models::usuario::Usuario;

/// Session claims issued at login; this is also the `usuario` payload the
/// frontend reads back from /usuario2/getSession.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub nombre: String,
    pub rol: i32,
    pub correo: String,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(usuario: &Usuario, expiry_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            id: usuario.usuario_id,
            nombre: usuario.nombre.clone(),
            rol: usuario.rol_id,
            correo: usuario.correo.clone(),
            username: usuario.username.clone(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    Expired,
    Invalid(String),
    Generation(String),
    SecretMissing,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingToken => write!(f, "missing bearer token"),
            AuthError::Expired => write!(f, "token expired"),
            AuthError::Invalid(msg) => write!(f, "invalid token: {}", msg),
            AuthError::Generation(msg) => write!(f, "token generation error: {}", msg),
            AuthError::SecretMissing => write!(f, "JWT secret not configured"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Hex SHA-256 digest of a password, stored in the Clave column.
pub fn hash_password(clave: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(clave.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretMissing);
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Generation(e.to_string()))
}

pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretMissing);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::Invalid(e.to_string()),
    })?;

    Ok(token_data.claims)
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get("authorization")
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MissingToken)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario() -> Usuario {
        Usuario {
            usuario_id: 7,
            nombre: "Ana".to_string(),
            rol_id: 2,
            clave: hash_password("secreta"),
            location_id: Some(1),
            fecha_empiezo: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            rfc: "XAXX010101000".to_string(),
            correo: "ana@sapatos.mx".to_string(),
            username: "ana".to_string(),
        }
    }

    #[test]
    fn password_digest_is_deterministic() {
        assert_eq!(hash_password("secreta"), hash_password("secreta"));
        assert_ne!(hash_password("secreta"), hash_password("otra"));
        // hex sha-256 is always 64 chars
        assert_eq!(hash_password("secreta").len(), 64);
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let claims = Claims::new(&usuario(), 24);
        let token = generate_jwt(&claims, "test-secret").unwrap();
        let decoded = validate_jwt(&token, "test-secret").unwrap();
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.nombre, "Ana");
        assert_eq!(decoded.rol, 2);
        assert_eq!(decoded.username, "ana");
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let claims = Claims::new(&usuario(), 24);
        let token = generate_jwt(&claims, "test-secret").unwrap();
        assert!(matches!(
            validate_jwt(&token, "other-secret"),
            Err(AuthError::Invalid(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = Claims::new(&usuario(), 24);
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
        let token = generate_jwt(&claims, "test-secret").unwrap();
        assert!(matches!(
            validate_jwt(&token, "test-secret"),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let claims = Claims::new(&usuario(), 24);
        assert!(matches!(
            generate_jwt(&claims, ""),
            Err(AuthError::SecretMissing)
        ));
    }

    #[test]
    fn bearer_token_requires_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));

        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");

        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic abc".parse().unwrap());
        assert!(bearer_token(&headers).is_err());
    }
}
