use crate::DomainError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Host name queried by the lookup flow.
///
/// Built from free-form user input: a leading `http://` or `https://` is
/// removed, everything from the first `/` on is dropped, and the remainder is
/// parsed as a URI authority (`[user@]host[:port]`) whose host must be a valid
/// DNS name. Uses `Arc<str>` so the name is shared cheaply across attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomain("input is empty".into()));
        }

        let without_scheme = strip_scheme(trimmed);
        let authority = without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        let host = host_of(authority)?;

        validate_host(host)?;
        Ok(Self(Arc::from(host.to_ascii_lowercase().as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully qualified form with the trailing root label.
    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn strip_scheme(input: &str) -> &str {
    for scheme in SCHEMES {
        if input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            return &input[scheme.len()..];
        }
    }
    input
}

fn host_of(authority: &str) -> Result<&str, DomainError> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, rest)| rest);

    let host = match host_port.rsplit_once(':') {
        Some((host, port)) => {
            if port.is_empty() || port.parse::<u16>().is_err() {
                return Err(DomainError::InvalidDomain(format!(
                    "invalid port in '{}'",
                    authority
                )));
            }
            host
        }
        None => host_port,
    };

    Ok(host.strip_suffix('.').unwrap_or(host))
}

fn validate_host(host: &str) -> Result<(), DomainError> {
    if host.is_empty() {
        return Err(DomainError::InvalidDomain("host is empty".into()));
    }
    if host.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidDomain(format!(
            "host exceeds {} characters",
            MAX_NAME_LENGTH
        )));
    }

    for label in host.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomain(format!(
                "empty label in '{}'",
                host
            )));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DomainError::InvalidDomain(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LENGTH
            )));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(DomainError::InvalidDomain(format!(
                "label '{}' contains invalid characters",
                label
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainError::InvalidDomain(format!(
                "label '{}' cannot start or end with '-'",
                label
            )));
        }
    }

    Ok(())
}
