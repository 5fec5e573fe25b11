use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::utils::error::{Error, Result};

/// Verifies the opaque bearer tokens the frontend obtains from the identity
/// provider. This service never issues tokens to end users; `mint` exists
/// for operator tooling and tests.
#[derive(Clone)]
pub struct TokenService {
    enc_key: EncodingKey,
    dec_key: DecodingKey,
    issuer: String,
    audience: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // subject = principal id
    pub jti: String, // unique id for token
    pub iat: i64,    // issued at (unix)
    pub exp: i64,    // expires at (unix)
    pub iss: String, // issuer
    pub aud: String, // audience
}

impl TokenService {
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            enc_key: EncodingKey::from_secret(secret),
            dec_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    pub fn mint(&self, subject: &str, validity_seconds: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(validity_seconds);
        let claims = TokenClaims {
            sub: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.enc_key)
            .map_err(|e| Error::Unexpected(format!("encode token: {e}")))?;
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        let mut val = Validation::new(Algorithm::HS256);
        val.set_audience(&[self.audience.clone()]);
        val.set_issuer(&[self.issuer.clone()]);
        let data =
            decode::<TokenClaims>(token, &self.dec_key, &val).map_err(|_| Error::Unauthorized)?;
        Ok(data.claims)
    }
}

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header of the current request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
}

impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_principal(req))
    }
}

fn extract_principal(req: &HttpRequest) -> Result<Principal> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| Error::Unexpected("TokenService not registered".into()))?;

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::Unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;

    let claims = tokens.verify(token)?;
    Ok(Principal {
        subject: claims.sub,
    })
}
