use axum::extract::RawQuery;
use std::collections::HashMap;

use crate::oauth::token::{issue_token, ErrorResponse, TokenRequest, TokenResponse};

/// Path of the mocked WeChat access-token endpoint.
pub const TOKEN_PATH: &str = "/weixin_api/cgi-bin/token";

/// GET /weixin_api/cgi-bin/token — issue a mock access token
pub async fn token(RawQuery(query): RawQuery) -> Result<TokenResponse, ErrorResponse> {
    let params = parse_query(query.as_deref().unwrap_or(""));
    let req = TokenRequest::from_query(&params);

    issue_token(&req).map_err(|reason| {
        tracing::debug!(%reason, appid = ?req.appid, "Rejected token request");
        reason.into()
    })
}

/// Decode a urlencoded query string. The first occurrence of a repeated name
/// wins; undecodable bytes are replaced rather than rejected.
fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_decodes_values() {
        let params = parse_query("appid=wx%20123&secret=a+b&grant_type=client_credential");
        assert_eq!(params["appid"], "wx 123");
        assert_eq!(params["secret"], "a b");
        assert_eq!(params["grant_type"], "client_credential");
    }

    #[test]
    fn test_parse_query_first_value_wins() {
        let params = parse_query("appid=first&appid=second");
        assert_eq!(params["appid"], "first");
    }

    #[test]
    fn test_parse_query_empty_and_bare_names() {
        assert!(parse_query("").is_empty());
        let params = parse_query("appid&secret=");
        assert_eq!(params["appid"], "");
        assert_eq!(params["secret"], "");
    }

    #[test]
    fn test_parse_query_tolerates_bad_escapes() {
        let params = parse_query("appid=%zz&secret=%FF");
        assert_eq!(params["appid"], "%zz");
        assert_eq!(params["secret"], "\u{FFFD}");
    }
}
