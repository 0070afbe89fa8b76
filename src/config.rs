//! Runtime configuration.
//!
//! Defaults overlaid with `SUBGATE_`-prefixed environment variables, so a
//! bare `subgate` binary runs with the same behavior the service always
//! had, and deployments can repoint endpoints without a rebuild.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

const ENV_PREFIX: &str = "SUBGATE_";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TCP port to listen on.
    pub port: u16,
    /// Interface to bind.
    pub bind: IpAddr,
    /// Origin of the upstream subtitle site.
    pub site_origin: String,
    /// Relay endpoint used to reach the upstream site.
    pub relay: String,
    /// Base URL advertised in self-referential extraction links; when
    /// unset, the request `Host` header is used instead.
    pub public_url: Option<String>,
    /// Upstream request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            site_origin: subgate_fetch::DEFAULT_SITE_ORIGIN.to_string(),
            relay: subgate_fetch::DEFAULT_RELAY.to_string(),
            public_url: None,
            timeout_secs: subgate_fetch::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }
}
