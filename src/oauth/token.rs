//! Mock `cgi-bin/token` credential exchange.
//!
//! Mirrors the WeChat access-token API closely enough for offline client
//! tests: a fixed grant type, caller-supplied `appid`/`secret`, and a token
//! derived from the `appid`. Nothing is verified and nothing is stored, so
//! identical requests always produce identical responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The only grant type the endpoint accepts.
pub const GRANT_TYPE_CLIENT_CREDENTIAL: &str = "client_credential";

/// Prefix of every synthesized access token; the `appid` follows verbatim.
pub const ACCESS_TOKEN_PREFIX: &str = "mock-token-";

/// Lifetime advertised in `expires_in`, in seconds. Never enforced.
pub const TOKEN_EXPIRES_IN: u64 = 7200;

/// `errcode` returned for any rejected request.
pub const ERRCODE_INVALID_REQUEST: i64 = 40001;

/// Parameters of a token request, as pulled from the query string.
///
/// Every field is optional at the transport level; [`issue_token`] decides
/// whether the combination is acceptable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub grant_type: Option<String>,
    pub appid: Option<String>,
    pub secret: Option<String>,
}

impl TokenRequest {
    /// Build a request from decoded query parameters. Unknown names are ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self {
            grant_type: params.get("grant_type").cloned(),
            appid: params.get("appid").cloned(),
            secret: params.get("secret").cloned(),
        }
    }
}

/// Successful token response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub errcode: i64,
    pub errmsg: &'static str,
}

/// Body returned when a request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub errcode: i64,
    pub errmsg: &'static str,
}

impl ErrorResponse {
    pub fn invalid_request() -> Self {
        Self {
            errcode: ERRCODE_INVALID_REQUEST,
            errmsg: "invalid request",
        }
    }
}

/// Why a token request was rejected. Callers only ever see
/// [`ErrorResponse::invalid_request`]; the variant is for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    MissingGrantType,
    UnsupportedGrantType(String),
    MissingAppId,
    MissingSecret,
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGrantType => write!(f, "grant_type is missing"),
            Self::UnsupportedGrantType(g) => write!(f, "unsupported grant_type '{g}'"),
            Self::MissingAppId => write!(f, "appid is missing or empty"),
            Self::MissingSecret => write!(f, "secret is missing or empty"),
        }
    }
}

impl std::error::Error for InvalidRequest {}

impl From<InvalidRequest> for ErrorResponse {
    fn from(_: InvalidRequest) -> Self {
        ErrorResponse::invalid_request()
    }
}

/// Validate a token request and synthesize the mock token.
pub fn issue_token(req: &TokenRequest) -> Result<TokenResponse, InvalidRequest> {
    match req.grant_type.as_deref() {
        None => return Err(InvalidRequest::MissingGrantType),
        Some(GRANT_TYPE_CLIENT_CREDENTIAL) => {}
        Some(other) => return Err(InvalidRequest::UnsupportedGrantType(other.to_string())),
    }

    let appid = match req.appid.as_deref() {
        Some(a) if !a.is_empty() => a,
        _ => return Err(InvalidRequest::MissingAppId),
    };

    if req.secret.as_deref().map_or(true, str::is_empty) {
        return Err(InvalidRequest::MissingSecret);
    }

    Ok(TokenResponse {
        access_token: format!("{ACCESS_TOKEN_PREFIX}{appid}"),
        expires_in: TOKEN_EXPIRES_IN,
        errcode: 0,
        errmsg: "ok",
    })
}

// Validation failures keep HTTP 200; existing callers only look at errcode.
impl IntoResponse for TokenResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
