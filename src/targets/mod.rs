//! Target string parsing.
//!
//! # Format
//! ```text
//! protocol:host:port[:timeoutMillis[:path[:code0_code1_...]]]
//!
//! tcp:localhost:5432:2000
//! http:localhost:8080:5000:health:200_204
//! https:api.example.com:443::status
//! ```
//!
//! # Design Decisions
//! - Several targets are joined with commas
//! - A missing or empty timeout falls back to the configured default
//! - Path and status codes only apply to http/https and are ignored for tcp
//! - Parsing never panics; every malformed field is a `TargetError`

pub mod error;

use std::str::FromStr;
use std::time::Duration;

use crate::check::{self, DependencyCheck};

pub use error::TargetError;

/// Supported target protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Http,
    Https,
}

impl FromStr for Protocol {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Protocol::Tcp),
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(TargetError::UnknownProtocol(other.to_string())),
        }
    }
}

/// One decoded target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub path: String,
    pub success_codes: Vec<u16>,
}

impl TargetSpec {
    /// Parse a single `protocol:host:port[:timeout[:path[:codes]]]` entry.
    pub fn parse(raw: &str, default_timeout: Duration) -> Result<Self, TargetError> {
        let fields: Vec<&str> = raw.trim().split(':').collect();

        let protocol: Protocol = fields[0].parse()?;

        let host = match fields.get(1) {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(TargetError::MissingHost(raw.to_string())),
        };

        let port = match fields.get(2) {
            Some(port) if !port.is_empty() => port
                .parse::<u16>()
                .map_err(|_| TargetError::InvalidPort(port.to_string()))?,
            _ => return Err(TargetError::MissingPort(raw.to_string())),
        };

        let timeout = match fields.get(3) {
            Some(millis) if !millis.is_empty() => millis
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| TargetError::InvalidTimeout(millis.to_string()))?,
            _ => default_timeout,
        };

        let (path, success_codes) = match protocol {
            Protocol::Tcp => (String::new(), Vec::new()),
            Protocol::Http | Protocol::Https => {
                let path = fields.get(4).map(|p| p.to_string()).unwrap_or_default();
                let codes = match fields.get(5) {
                    Some(codes) => parse_status_codes(codes)?,
                    None => Vec::new(),
                };
                (path, codes)
            }
        };

        Ok(Self {
            protocol,
            host,
            port,
            timeout,
            path,
            success_codes,
        })
    }

    /// Build the check this target describes.
    pub fn into_check(self) -> Box<dyn DependencyCheck> {
        match self.protocol {
            Protocol::Tcp => check::tcp_check(self.host, self.port, self.timeout),
            Protocol::Http => {
                check::http_check(self.host, self.port, self.timeout, self.path, self.success_codes)
            }
            Protocol::Https => {
                check::https_check(self.host, self.port, self.timeout, self.path, self.success_codes)
            }
        }
    }
}

/// Split a comma separated list and parse each entry. Blank entries are skipped.
pub fn parse_targets(raw: &str, default_timeout: Duration) -> Result<Vec<TargetSpec>, TargetError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| TargetSpec::parse(entry, default_timeout))
        .collect()
}

fn parse_status_codes(raw: &str) -> Result<Vec<u16>, TargetError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split('_')
        .map(|code| {
            code.parse::<u16>()
                .map_err(|_| TargetError::InvalidStatusCode(raw.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::from_secs(30);

    #[test]
    fn test_parse_tcp() {
        let spec = TargetSpec::parse("tcp:localhost:5432:2000", DEFAULT).unwrap();
        assert_eq!(spec.protocol, Protocol::Tcp);
        assert_eq!(spec.host, "localhost");
        assert_eq!(spec.port, 5432);
        assert_eq!(spec.timeout, Duration::from_millis(2000));
        assert!(spec.path.is_empty());
        assert!(spec.success_codes.is_empty());
    }

    #[test]
    fn test_parse_http_with_path_and_codes() {
        let spec = TargetSpec::parse("HTTP:svc:8080:5000:health:200_204", DEFAULT).unwrap();
        assert_eq!(spec.protocol, Protocol::Http);
        assert_eq!(spec.path, "health");
        assert_eq!(spec.success_codes, vec![200, 204]);
    }

    #[test]
    fn test_parse_https_empty_codes() {
        let spec = TargetSpec::parse("https:api:443:100:status:", DEFAULT).unwrap();
        assert_eq!(spec.protocol, Protocol::Https);
        assert_eq!(spec.path, "status");
        assert!(spec.success_codes.is_empty());
    }

    #[test]
    fn test_missing_timeout_uses_default() {
        let spec = TargetSpec::parse("tcp:db:5432", DEFAULT).unwrap();
        assert_eq!(spec.timeout, DEFAULT);

        let spec = TargetSpec::parse("http:svc:80::ready", DEFAULT).unwrap();
        assert_eq!(spec.timeout, DEFAULT);
        assert_eq!(spec.path, "ready");
    }

    #[test]
    fn test_tcp_ignores_http_fields() {
        let spec = TargetSpec::parse("tcp:db:5432:100:ignored:abc", DEFAULT).unwrap();
        assert!(spec.path.is_empty());
        assert!(spec.success_codes.is_empty());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            TargetSpec::parse("udp:db:53:100", DEFAULT),
            Err(TargetError::UnknownProtocol(p)) if p == "udp"
        ));
        assert!(matches!(
            TargetSpec::parse("tcp", DEFAULT),
            Err(TargetError::MissingHost(_))
        ));
        assert!(matches!(
            TargetSpec::parse("tcp:db", DEFAULT),
            Err(TargetError::MissingPort(_))
        ));
        assert!(matches!(
            TargetSpec::parse("tcp:db:70000:100", DEFAULT),
            Err(TargetError::InvalidPort(p)) if p == "70000"
        ));
        assert!(matches!(
            TargetSpec::parse("tcp:db:5432:soon", DEFAULT),
            Err(TargetError::InvalidTimeout(t)) if t == "soon"
        ));
        assert!(matches!(
            TargetSpec::parse("http:svc:80:100:health:200_ok", DEFAULT),
            Err(TargetError::InvalidStatusCode(c)) if c == "200_ok"
        ));
    }

    #[test]
    fn test_parse_target_list() {
        let specs = parse_targets(
            "tcp:db:5432:2000, http:svc:8080:1000:health:200 ,,",
            DEFAULT,
        )
        .unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].protocol, Protocol::Tcp);
        assert_eq!(specs[1].protocol, Protocol::Http);
        assert_eq!(specs[1].success_codes, vec![200]);
    }

    #[test]
    fn test_into_check_addresses() {
        let tcp = TargetSpec::parse("tcp:db:5432:2000", DEFAULT).unwrap().into_check();
        assert_eq!(tcp.address(), "tcp://db:5432");
        assert_eq!(tcp.timeout(), Duration::from_millis(2000));

        let https = TargetSpec::parse("https:api:443:100:status", DEFAULT)
            .unwrap()
            .into_check();
        assert_eq!(https.address(), "https://api:443/status");
    }
}
