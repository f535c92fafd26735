//! Client address resolution

use actix_web::HttpRequest;

/// Returned when the peer address is unavailable
const UNKNOWN_IP: &str = "unknown";

/// Resolve the address a request came from
///
/// The peer address is used with its port stripped. `X-Forwarded-For` (first
/// entry) and `X-Real-IP` are consulted only when `trust_proxy_headers` is
/// set, since any client can forge them.
pub fn client_ip(req: &HttpRequest, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = proxy_header_ip(req) {
            return ip;
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

fn proxy_header_ip(req: &HttpRequest) -> Option<String> {
    let headers = req.headers();

    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded.or_else(real_ip).map(String::from)
}
