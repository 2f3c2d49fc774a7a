use std::{env, time::Duration};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    config::SigningConfig,
    signing::{error::SigningError, ports::TokenSigner},
};

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize)]
struct JwtHeader<'a> {
    alg: &'static str,
    typ: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<&'a str>,
}

#[derive(Serialize)]
struct JwtClaims<'a> {
    iss: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
    jti: String,
}

/// HS256 JWT issuer. Each token is single-use (`jti`) and short-lived.
pub struct HmacJwtSigner {
    issuer: String,
    key_id: Option<String>,
    secret: Vec<u8>,
    ttl: Duration,
}

impl HmacJwtSigner {
    pub fn new(
        issuer: impl Into<String>,
        key_id: Option<String>,
        secret: impl Into<Vec<u8>>,
        ttl: Duration,
    ) -> Result<Self, SigningError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SigningError::EmptySecret);
        }
        HmacSha256::new_from_slice(&secret)
            .map_err(|err| SigningError::InvalidKey(err.to_string()))?;

        Ok(Self {
            issuer: issuer.into(),
            key_id,
            secret,
            ttl,
        })
    }

    pub fn from_env(config: &SigningConfig) -> Result<Self, SigningError> {
        let secret = env::var(&config.secret_env).map_err(|_| SigningError::MissingSecret {
            var: config.secret_env.clone(),
        })?;

        Self::new(
            config.issuer.clone(),
            config.key_id.clone(),
            secret.trim().as_bytes(),
            Duration::from_secs(config.token_ttl_secs),
        )
    }

    fn sign_at(&self, audience: &str, now: OffsetDateTime) -> Result<String, SigningError> {
        let issued_at = now.unix_timestamp();
        let header = JwtHeader {
            alg: "HS256",
            typ: "JWT",
            kid: self.key_id.as_deref(),
        };
        let claims = JwtClaims {
            iss: &self.issuer,
            aud: audience,
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl.as_secs() as i64),
            jti: Uuid::new_v4().to_string(),
        };

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?),
        );

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| SigningError::InvalidKey(err.to_string()))?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }
}

impl TokenSigner for HmacJwtSigner {
    fn sign(&self, audience: &str) -> Result<String, SigningError> {
        self.sign_at(audience, OffsetDateTime::now_utc())
    }
}
