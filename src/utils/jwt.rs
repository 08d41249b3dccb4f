//! 访问令牌与刷新令牌
//!
//! access token 放在 `Authorization: Bearer` 头中，refresh token 存于 http-only Cookie。

use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_COOKIE: &str = "refresh_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub token_type: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static [u8] {
        AppConfig::get().jwt.secret.as_bytes()
    }

    /// 签发指定类型的令牌
    pub fn issue(user_id: i64, role: &str, kind: TokenKind, ttl: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: kind.as_str().to_string(),
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(Self::secret()),
        )
    }

    pub fn access_ttl() -> Duration {
        Duration::minutes(AppConfig::get().jwt.access_token_expiry)
    }

    pub fn refresh_ttl(remember_me: bool) -> Duration {
        let jwt = &AppConfig::get().jwt;
        if remember_me {
            Duration::days(jwt.refresh_token_remember_me_expiry)
        } else {
            Duration::days(jwt.refresh_token_expiry)
        }
    }

    pub fn token_pair(user_id: i64, role: &str, remember_me: bool) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: Self::issue(user_id, role, TokenKind::Access, Self::access_ttl())?,
            refresh_token: Self::issue(
                user_id,
                role,
                TokenKind::Refresh,
                Self::refresh_ttl(remember_me),
            )?,
        })
    }

    /// 校验签名、过期时间与令牌类型
    pub fn verify(token: &str, kind: TokenKind) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(Self::secret()),
            &Validation::default(),
        )?
        .claims;

        if claims.token_type != kind.as_str() {
            return Err(ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    /// 用 refresh token 换取新的 access token
    pub fn refresh_access_token(refresh_token: &str) -> Result<String, JwtError> {
        let claims = Self::verify(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id().ok_or(ErrorKind::InvalidToken)?;
        Self::issue(user_id, &claims.role, TokenKind::Access, Self::access_ttl())
    }

    fn build_cookie(value: String, max_age: actix_web::cookie::time::Duration) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE, value)
            .path("/")
            .max_age(max_age)
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn refresh_cookie(refresh_token: &str, remember_me: bool) -> Cookie<'static> {
        let days = Self::refresh_ttl(remember_me).num_days();
        Self::build_cookie(
            refresh_token.to_string(),
            actix_web::cookie::time::Duration::days(days),
        )
    }

    /// 注销时覆盖浏览器中的 Cookie
    pub fn expired_refresh_cookie() -> Cookie<'static> {
        Self::build_cookie(String::new(), actix_web::cookie::time::Duration::seconds(0))
    }

    pub fn refresh_token_from(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE).map(|c| c.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let token = JwtUtils::issue(7, "staff", TokenKind::Access, Duration::minutes(5)).unwrap();
        let claims = JwtUtils::verify(&token, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.role, "staff");
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let token = JwtUtils::issue(7, "staff", TokenKind::Refresh, Duration::days(1)).unwrap();
        assert!(JwtUtils::verify(&token, TokenKind::Access).is_err());
        assert!(JwtUtils::refresh_access_token(&token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::issue(7, "staff", TokenKind::Access, Duration::minutes(-10)).unwrap();
        assert!(JwtUtils::verify(&token, TokenKind::Access).is_err());
    }
}
