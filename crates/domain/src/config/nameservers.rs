use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameServersConfig {
    /// Raw nameserver specs: `IPv4[:port]`, `[IPv6]:port`, bare IPv6 or `domain[:port]`.
    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default = "default_port")]
    pub default_port: u16,
}

impl Default for NameServersConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            default_port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    53
}
