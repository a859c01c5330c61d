use crate::errors::DomainError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    IPv4,
    IPv6,
    /// Domain name accepted without resolution.
    Unknown,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IPv4 => "ipv4",
            Self::IPv6 => "ipv6",
            Self::Unknown => "unknown",
        }
    }
}

/// Raw endpoint specification accepted by [`Address::parse`].
#[derive(Debug, Clone, Copy)]
pub enum AddressInput<'a> {
    Text(&'a str),
    HostPort(&'a str, u16),
    Address(&'a Address),
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(s: &'a str) -> Self {
        AddressInput::Text(s)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(s: &'a String) -> Self {
        AddressInput::Text(s.as_str())
    }
}

impl<'a> From<(&'a str, u16)> for AddressInput<'a> {
    fn from((host, port): (&'a str, u16)) -> Self {
        AddressInput::HostPort(host, port)
    }
}

impl<'a> From<&'a Address> for AddressInput<'a> {
    fn from(addr: &'a Address) -> Self {
        AddressInput::Address(addr)
    }
}

/// A nameserver endpoint: host, port and address family.
///
/// Equality and hashing only consider `(host, port)`. Two addresses that
/// differ only by family are the same pool member.
#[derive(Debug, Clone)]
pub struct Address {
    host: Arc<str>,
    port: u16,
    family: AddressFamily,
}

impl Address {
    pub fn new<'a>(
        input: impl Into<AddressInput<'a>>,
        default_port: u16,
        allow_domain: bool,
    ) -> Result<Self, DomainError> {
        Self::parse(input, default_port, allow_domain)
    }

    /// Parses an endpoint specification.
    ///
    /// Strings with more than one `:` are IPv6 literals, either bare
    /// (`::1`, no port extraction) or bracketed (`[::1]:53`). Anything
    /// else is `IPv4[:port]`, falling back to `domain[:port]` when
    /// `allow_domain` is set. `default_port` applies when no port is given.
    pub fn parse<'a>(
        input: impl Into<AddressInput<'a>>,
        default_port: u16,
        allow_domain: bool,
    ) -> Result<Self, DomainError> {
        let input: AddressInput<'a> = input.into();
        match input {
            AddressInput::Address(addr) => Ok(addr.clone()),
            AddressInput::HostPort(host, port) => Self::parse_text(host, port, allow_domain),
            AddressInput::Text(s) => Self::parse_text(s, default_port, allow_domain),
        }
    }

    fn parse_text(s: &str, default_port: u16, allow_domain: bool) -> Result<Self, DomainError> {
        if s.matches(':').count() > 1 {
            return Self::parse_ipv6(s, default_port);
        }
        match Self::parse_ipv4(s, default_port) {
            Ok(addr) => Ok(addr),
            Err(_) if allow_domain => Self::parse_domain(s, default_port),
            Err(e) => Err(e),
        }
    }

    fn parse_ipv4(s: &str, default_port: u16) -> Result<Self, DomainError> {
        let (host, port) = split_host_port(s, default_port)?;
        if host.parse::<Ipv4Addr>().is_err() {
            return Err(DomainError::InvalidHost(host.to_string()));
        }
        Ok(Self {
            host: host.into(),
            port,
            family: AddressFamily::IPv4,
        })
    }

    fn parse_ipv6(s: &str, default_port: u16) -> Result<Self, DomainError> {
        let (host, port) = match s.strip_prefix('[') {
            Some(rest) => {
                let end = rest
                    .find(']')
                    .ok_or_else(|| DomainError::InvalidHost(s.to_string()))?;
                let port = match &rest[end + 1..] {
                    "" => default_port,
                    suffix => {
                        let port_str = suffix
                            .strip_prefix(':')
                            .ok_or_else(|| DomainError::InvalidHost(s.to_string()))?;
                        parse_port(port_str)?
                    }
                };
                (&rest[..end], port)
            }
            None => (s, default_port),
        };
        if host.parse::<Ipv6Addr>().is_err() {
            return Err(DomainError::InvalidHost(host.to_string()));
        }
        Ok(Self {
            host: host.into(),
            port,
            family: AddressFamily::IPv6,
        })
    }

    fn parse_domain(s: &str, default_port: u16) -> Result<Self, DomainError> {
        let (host, port) = split_host_port(s, default_port)?;
        Ok(Self {
            host: host.into(),
            port,
            family: AddressFamily::Unknown,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The `(host, port)` pair that identifies this address.
    pub fn to_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    /// Returns the socket address for IP literals, `None` for domain names.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self.family {
            AddressFamily::IPv4 | AddressFamily::IPv6 => self
                .host
                .parse::<IpAddr>()
                .ok()
                .map(|ip| SocketAddr::new(ip, self.port)),
            AddressFamily::Unknown => None,
        }
    }

    /// Renders the address, leaving the port out when it equals
    /// `omit_port_for`. `None` always leaves the port out.
    ///
    /// Domain names with a visible port render as `host:port`.
    pub fn to_display_string(&self, omit_port_for: Option<u16>) -> String {
        match omit_port_for {
            None => self.host.to_string(),
            Some(default) if default == self.port => self.host.to_string(),
            Some(_) => match self.family {
                AddressFamily::IPv6 => format!("[{}]:{}", self.host, self.port),
                AddressFamily::IPv4 | AddressFamily::Unknown => {
                    format!("{}:{}", self.host, self.port)
                }
            },
        }
    }
}

fn split_host_port(s: &str, default_port: u16) -> Result<(&str, u16), DomainError> {
    match s.split_once(':') {
        Some((host, port_str)) => Ok((host, parse_port(port_str)?)),
        None => Ok((s, default_port)),
    }
}

fn parse_port(s: &str) -> Result<u16, DomainError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidHost(s.to_string()));
    }
    s.parse::<u16>()
        .map_err(|_| DomainError::InvalidHost(s.to_string()))
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.to_addr() == other.to_addr()
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_addr().hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string(Some(0)))
    }
}
