//! Public IP readout
//!
//! One lookup at startup. Any failure (network, status, body) collapses to
//! the blocked sentinel; there is no retry.

use serde::Deserialize;

use crate::constants::IP_BLOCKED;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Extract the address from a `{ "ip": "..." }` body
pub fn parse_ip_response(body: &str) -> Result<String> {
    let response: IpResponse = serde_json::from_str(body)?;
    Ok(response.ip)
}

/// Text for the IP readout
pub fn ip_display(lookup: &Result<String>) -> String {
    match lookup {
        Ok(ip) => ip.clone(),
        Err(_) => IP_BLOCKED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OverlayError;

    #[test]
    fn test_parse_ok() {
        let ip = parse_ip_response(r#"{"ip":"203.0.113.7"}"#).unwrap();
        assert_eq!(ip, "203.0.113.7");
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(parse_ip_response(r#"{"address":"203.0.113.7"}"#).is_err());
        assert!(parse_ip_response("<html>").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ip_display(&Ok("198.51.100.1".into())), "198.51.100.1");
        assert_eq!(ip_display(&Err(OverlayError::HttpStatus(500))), "BLOCKED.IP");
        assert_eq!(ip_display(&Err(OverlayError::Js("TypeError: Failed to fetch".into()))), "BLOCKED.IP");
    }
}
