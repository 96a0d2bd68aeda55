use poem::Request;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Direct peer address of the connection, without the port
pub fn peer_ip(req: &Request) -> Option<String> {
    req.remote_addr()
        .as_socket_addr()
        .map(|addr| addr.ip().to_string())
}

/// First hop listed in `X-Forwarded-For`, if the header is present and non-empty
///
/// Only the originating client is kept; the proxy chain after it is dropped
/// rather than stored verbatim as the header arrived.
pub fn forwarded_for(req: &Request) -> Option<String> {
    req.header(FORWARDED_FOR_HEADER)
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

/// Client address: the forwarded-for value when present, else the peer address
pub fn client_ip(req: &Request) -> Option<String> {
    forwarded_for(req).or_else(|| peer_ip(req))
}

/// Byte-for-byte comparison of the supplied API key against the secret
pub fn api_key_matches(provided: Option<&str>, secret: &str) -> bool {
    provided.is_some_and(|key| key.as_bytes() == secret.as_bytes())
}
