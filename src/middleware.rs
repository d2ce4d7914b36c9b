use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{
        HeaderMap,
        header::{REFERER, USER_AGENT},
        request::Parts,
    },
};

use crate::consts::pixel_const::{CF_IP_COUNTRY, X_FORWARDED_FOR};

/// Whatever the pixel request tells us about who fetched it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub user_agent: Option<String>,
    pub client_ip: Option<String>,
    pub country: Option<String>,
    pub referer: Option<String>,
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let peer = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self::from_headers(&parts.headers, peer))
    }
}

impl RequestMeta {
    /// `X-Forwarded-For` wins over the transport peer; it is stored as sent.
    pub fn from_headers(headers: &HeaderMap, peer: Option<String>) -> Self {
        Self {
            user_agent: header_string(headers, USER_AGENT.as_str()),
            client_ip: header_string(headers, X_FORWARDED_FOR).or(peer),
            country: header_string(headers, CF_IP_COUNTRY),
            referer: header_string(headers, REFERER.as_str()),
        }
    }
}

// ! repeated header lines are joined with `,`, as the upstream WSGI stack stores them
fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_forwarded_for_beats_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        let meta = RequestMeta::from_headers(&headers, Some("127.0.0.1".into()));
        assert_eq!(meta.client_ip.as_deref(), Some("203.0.113.7, 10.0.0.1"));
    }

    #[test]
    fn test_peer_used_without_forwarded_for() {
        let meta = RequestMeta::from_headers(&HeaderMap::new(), Some("192.0.2.1".into()));
        assert_eq!(meta.client_ip.as_deref(), Some("192.0.2.1"));
        assert_eq!(meta.user_agent, None);
        assert_eq!(meta.country, None);
        assert_eq!(meta.referer, None);
    }

    #[test]
    fn test_headers_are_taken_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0 (Thunderbird)"));
        headers.insert(CF_IP_COUNTRY, HeaderValue::from_static("NG"));
        headers.insert(REFERER, HeaderValue::from_static("https://mail.example.com/"));
        let meta = RequestMeta::from_headers(&headers, None);
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0 (Thunderbird)"));
        assert_eq!(meta.country.as_deref(), Some("NG"));
        assert_eq!(meta.referer.as_deref(), Some("https://mail.example.com/"));
        assert_eq!(meta.client_ip, None);
    }

    #[test]
    fn test_repeated_forwarded_for_lines_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));
        headers.append(X_FORWARDED_FOR, HeaderValue::from_static("10.0.0.1"));
        let meta = RequestMeta::from_headers(&headers, Some("127.0.0.1".into()));
        assert_eq!(meta.client_ip.as_deref(), Some("203.0.113.7,10.0.0.1"));
    }

    #[test]
    fn test_non_utf8_header_is_kept_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_bytes(b"Mail\xe9Client/1.0").unwrap(),
        );
        let meta = RequestMeta::from_headers(&headers, None);
        assert_eq!(meta.user_agent.as_deref(), Some("Mail\u{FFFD}Client/1.0"));
    }
}
