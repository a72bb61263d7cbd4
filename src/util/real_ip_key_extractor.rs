use crate::AppState;
use actix_governor::{KeyExtractor, SimpleKeyExtractionError};
use actix_web::dev::ServiceRequest;
use actix_web::web;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Rate-limit key: the client IP, taken from forwarding headers only when the
/// peer is the configured reverse proxy.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RealIpKeyExtractor;

fn parse_ip(raw: &str) -> Option<IpAddr> {
    SocketAddr::from_str(raw)
        .map(|socket| socket.ip())
        .or_else(|_| IpAddr::from_str(raw))
        .ok()
}

impl KeyExtractor for RealIpKeyExtractor {
    type Key = IpAddr;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let trusted_proxy = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.config.trusted_proxy_ip)
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let peer_ip = req.peer_addr().map(|socket| socket.ip());
        let connection_info = req.connection_info();

        match peer_ip {
            Some(peer) if peer == trusted_proxy => connection_info
                .realip_remote_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract real IP address from request")
                }),
            _ => connection_info
                .peer_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract peer IP address from request")
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn uses_peer_address_without_app_state() {
        let req = TestRequest::default()
            .peer_addr("203.0.113.9:41000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "198.51.100.1"))
            .to_srv_request();

        let key = RealIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, IpAddr::from_str("203.0.113.9").unwrap());
    }

    #[test]
    fn parses_bare_and_socket_addresses() {
        assert_eq!(parse_ip("10.0.0.1"), Some(IpAddr::from_str("10.0.0.1").unwrap()));
        assert_eq!(parse_ip("10.0.0.1:8080"), Some(IpAddr::from_str("10.0.0.1").unwrap()));
        assert_eq!(parse_ip("not-an-ip"), None);
    }
}
