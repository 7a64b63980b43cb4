use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub addr: SocketAddr,
    pub campus_network: Option<PathBuf>,
    pub subway_network: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("MEETPOINT_API_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("MEETPOINT_API_ADDR is not a socket address: {addr}"))?;

        Ok(Config {
            addr,
            campus_network: lookup("MEETPOINT_CAMPUS_NETWORK").map(PathBuf::from),
            subway_network: lookup("MEETPOINT_SUBWAY_NETWORK").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.campus_network.is_none());
        assert!(config.subway_network.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MEETPOINT_API_ADDR", "0.0.0.0:3000"),
            ("MEETPOINT_SUBWAY_NETWORK", "data/subway.json"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.subway_network, Some(PathBuf::from("data/subway.json")));
    }

    #[test]
    fn test_invalid_addr() {
        assert!(Config::from_lookup(lookup(&[("MEETPOINT_API_ADDR", "not an addr")])).is_err());
    }
}
